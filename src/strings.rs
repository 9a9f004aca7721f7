use crate::ctype::isspace;

pub fn is_line_end_char(ch: u8) -> bool {
    matches!(ch, 10 | 13)
}

pub fn is_space_or_tab(ch: u8) -> bool {
    matches!(ch, 9 | 32)
}

pub fn ltrim_slice(mut i: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = i {
        if isspace(*first) {
            i = rest;
        } else {
            break;
        }
    }
    i
}

pub fn rtrim_slice(mut i: &[u8]) -> &[u8] {
    while let [rest @ .., last] = i {
        if isspace(*last) {
            i = rest;
        } else {
            break;
        }
    }
    i
}

pub fn trim_slice(mut i: &[u8]) -> &[u8] {
    i = ltrim_slice(i);
    i = rtrim_slice(i);
    i
}

/// Normalize a reference identifier: trim, casefold, and collapse internal
/// whitespace to single spaces.
pub fn normalize_label(i: &str) -> String {
    // trim_slice only removes bytes from start and end that match isspace();
    // result is UTF-8.
    let i = unsafe { std::str::from_utf8_unchecked(trim_slice(i.as_bytes())) };

    let mut v = String::with_capacity(i.len());
    let mut last_was_whitespace = false;
    for c in i.chars() {
        for e in c.to_lowercase() {
            if e.is_whitespace() {
                if !last_was_whitespace {
                    last_was_whitespace = true;
                    v.push(' ');
                }
            } else {
                last_was_whitespace = false;
                v.push(e);
            }
        }
    }
    v
}

#[cfg(test)]
pub mod tests {
    use super::{normalize_label, trim_slice};

    #[test]
    fn normalize_label_basic() {
        assert_eq!(normalize_label("Foo"), "foo");
        assert_eq!(normalize_label("  foo\n\t bar  "), "foo bar");
        assert_eq!(normalize_label("ΑΓΩ"), "αγω");
    }

    #[test]
    fn trim_slice_whitespace() {
        assert_eq!(trim_slice(b" \t foo \r\n"), b"foo");
        assert_eq!(trim_slice(b"   "), b"");
    }
}
