use crate::ctype::isspace;
use crate::strings::is_line_end_char;
use regex::Regex;

fn search(re: &Regex, line: &str) -> Option<usize> {
    re.find(line).map(|m| m.end())
}

pub fn spacechars(line: &str) -> Option<usize> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^[ \t\v\f\r\n]+").unwrap();
    }
    search(&RE, line)
}

pub fn link_title(line: &str) -> Option<usize> {
    lazy_static! {
        static ref RE: Regex = Regex::new(
            r#"^(?s:"(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|\((?:\\.|[^()\\])*\))"#
        )
        .unwrap();
    }
    search(&RE, line)
}

/// Scan a link destination, either `<..>`-enclosed or raw with balanced
/// parentheses, returning the matched length.
pub fn link_url(line: &str, balance_cap: usize) -> Option<usize> {
    let bytes = line.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    let mut nb_p = 0;

    if i < len && bytes[i] == b'<' {
        i += 1;
        loop {
            if i >= len {
                return None;
            }
            match bytes[i] {
                b'>' => {
                    i += 1;
                    break;
                }
                b'\\' => i += 2,
                b'<' => return None,
                b if is_line_end_char(b) => return None,
                _ => i += 1,
            }
        }
    } else {
        while i < len {
            match bytes[i] {
                b'\\' => i += 2,
                b'(' => {
                    nb_p += 1;
                    if nb_p > balance_cap {
                        return None;
                    }
                    i += 1;
                }
                b')' => {
                    if nb_p == 0 {
                        break;
                    }
                    nb_p -= 1;
                    i += 1;
                }
                b if isspace(b) => break,
                _ => i += 1,
            }
        }
    }

    if i == 0 {
        None
    } else {
        Some(i.min(len))
    }
}
