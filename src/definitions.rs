//! The definition registry: reference identifiers harvested from
//! `[label]: destination "title"` lines in an earlier pass.  Only the
//! normalized identifiers are kept; destinations and titles are scanned for
//! validity and thrown away.

use std::collections::HashSet;

use crate::ctype::{ispunct, isspace};
use crate::options::Options;
use crate::scanners;
use crate::strings::{self, is_space_or_tab};

/// A read-only set of normalized reference identifiers.
#[derive(Debug, Clone, Default)]
pub struct DefinitionSet {
    set: HashSet<String>,
}

impl DefinitionSet {
    pub fn new() -> DefinitionSet {
        DefinitionSet {
            set: HashSet::new(),
        }
    }

    /// Add an identifier.  Normalization happens here, so `Foo` and
    /// `  foo  ` are one identifier.
    pub fn insert(&mut self, label: &str) -> bool {
        self.set.insert(strings::normalize_label(label))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.set.contains(&strings::normalize_label(label))
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for DefinitionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> DefinitionSet {
        let mut set = DefinitionSet::new();
        for label in iter {
            set.insert(label.as_ref());
        }
        set
    }
}

/// Collect the run of definition lines at the start of `input`.  Returns
/// the set plus the byte offset where inline content begins.
pub fn harvest(input: &str, options: &Options) -> (DefinitionSet, usize) {
    let mut set = DefinitionSet::new();
    let mut pos = 0;
    loop {
        let mut probe = pos;
        while let Some(n) = blank_line(&input[probe..]) {
            probe += n;
        }
        match parse_definition(&input[probe..], options) {
            Some((label, len)) => {
                set.insert(label);
                pos = probe + len;
            }
            None => break,
        }
    }
    (set, pos)
}

/// One definition: label, colon, destination, optional title, nothing else
/// on the final line.
fn parse_definition<'s>(s: &'s str, options: &Options) -> Option<(&'s str, usize)> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    while pos < 3 && bytes.get(pos) == Some(&b' ') {
        pos += 1;
    }
    let label_len = scan_label(&s[pos..], options)?;
    let label = &s[pos + 1..pos + label_len - 1];
    pos += label_len;
    if bytes.get(pos) != Some(&b':') {
        return None;
    }
    pos += 1;
    pos += spnl(&s[pos..]);
    let dest_len = scanners::link_url(&s[pos..], options.link_destination_balance)?;
    pos += dest_len;

    let after_destination = pos;
    let ws = spnl(&s[pos..]);
    if ws > 0 {
        if let Some(title_len) = scanners::link_title(&s[pos + ws..]) {
            let end = pos + ws + title_len;
            if let Some(n) = blank_to_line_end(&s[end..]) {
                return Some((label, end + n));
            }
        }
    }
    // No title, or an invalid one: the destination alone must end the line.
    let n = blank_to_line_end(&s[after_destination..])?;
    Some((label, after_destination + n))
}

fn scan_label(s: &str, options: &Options) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'[') {
        return None;
    }
    let mut i = 1;
    let mut seen = false;
    while let Some(&b) = bytes.get(i) {
        match b {
            b']' => {
                if !seen {
                    return None;
                }
                return Some(i + 1);
            }
            b'[' => return None,
            b'\\' => {
                i += 1;
                seen = true;
                if bytes.get(i).copied().map_or(false, ispunct) {
                    i += 1;
                }
            }
            _ => {
                if !isspace(b) {
                    seen = true;
                }
                i += 1;
            }
        }
        if i > options.link_label_max {
            return None;
        }
    }
    None
}

/// Spaces and tabs around at most one line ending.
fn spnl(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    while bytes.get(i).copied().map_or(false, is_space_or_tab) {
        i += 1;
    }
    let mut seen_line_end = false;
    if bytes.get(i) == Some(&b'\r') {
        i += 1;
        seen_line_end = true;
    }
    if bytes.get(i) == Some(&b'\n') {
        i += 1;
        seen_line_end = true;
    }
    if seen_line_end {
        while bytes.get(i).copied().map_or(false, is_space_or_tab) {
            i += 1;
        }
    }
    i
}

/// Trailing blanks through the line ending (or end of input), if the rest
/// of the line is in fact blank.
fn blank_to_line_end(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while bytes.get(i).copied().map_or(false, is_space_or_tab) {
        i += 1;
    }
    match bytes.get(i) {
        None => Some(i),
        Some(&b'\n') => Some(i + 1),
        Some(&b'\r') => Some(if bytes.get(i + 1) == Some(&b'\n') {
            i + 2
        } else {
            i + 1
        }),
        Some(_) => None,
    }
}

fn blank_line(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while bytes.get(i).copied().map_or(false, is_space_or_tab) {
        i += 1;
    }
    match bytes.get(i) {
        Some(&b'\n') => Some(i + 1),
        Some(&b'\r') => Some(if bytes.get(i + 1) == Some(&b'\n') {
            i + 2
        } else {
            i + 1
        }),
        _ => None,
    }
}

#[cfg(test)]
pub mod tests {
    use super::{harvest, DefinitionSet};
    use crate::options::Options;

    fn harvested(input: &str) -> (DefinitionSet, usize) {
        harvest(input, &Options::default())
    }

    #[test]
    fn single_definition() {
        let (set, offset) = harvested("[foo]: /url\nrest");
        assert!(set.contains("foo"));
        assert!(set.contains("FOO"));
        assert_eq!(set.len(), 1);
        assert_eq!(offset, 12);
    }

    #[test]
    fn definition_with_title() {
        let (set, offset) = harvested("[a]: /url \"title\"\n[b]: <u v> 'multi\nline'\n");
        assert!(set.contains("a"));
        assert!(set.contains("b"));
        assert_eq!(offset, 42);
    }

    #[test]
    fn title_on_next_line() {
        let (set, _) = harvested("[a]: /url\n  \"title\"\n");
        assert!(set.contains("a"));
    }

    #[test]
    fn garbage_after_destination_is_not_a_definition() {
        let (set, offset) = harvested("[a]: /url extra\n");
        assert!(set.is_empty());
        assert_eq!(offset, 0);
    }

    #[test]
    fn four_space_indent_is_not_a_definition() {
        let (set, _) = harvested("    [a]: /url\n");
        assert!(set.is_empty());
    }

    #[test]
    fn blank_lines_between_definitions() {
        let (set, _) = harvested("[a]: /1\n\n[b]: /2\n");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn label_normalization_collapses_whitespace() {
        let (set, _) = harvested("[Foo   Bar]: /url\n");
        assert!(set.contains("foo bar"));
    }

    #[test]
    fn unterminated_title_invalidates_definition() {
        // `"x` never closes, and the line does not end after the
        // destination either.
        let (set, _) = harvested("[a]: /url \"x\n");
        assert!(set.is_empty());
    }
}
