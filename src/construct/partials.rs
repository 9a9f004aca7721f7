//! Sub-recognizers for the pieces shared by resources, references, and
//! definitions: destinations, titles, labels, and whitespace.
//!
//! Each factory takes the token types to emit, so callers decide how the
//! pieces are tagged in the stream.

use crate::ctype::ispunct;
use crate::events::TokenType;
use crate::strings::{is_line_end_char, is_space_or_tab};
use crate::tokenizer::Tokenizer;

pub struct DestinationTags {
    pub destination: TokenType,
    pub literal: TokenType,
    pub literal_marker: TokenType,
    pub raw: TokenType,
    pub string: TokenType,
}

pub struct TitleTags {
    pub title: TokenType,
    pub marker: TokenType,
    pub string: TokenType,
}

pub struct LabelTags {
    pub label: TokenType,
    pub marker: TokenType,
    pub string: TokenType,
}

/// Eat any run of spaces, tabs, and line endings.
pub fn whitespace(t: &mut Tokenizer) {
    loop {
        match t.peek_char() {
            Some(c) if is_space_or_tab(c) => {
                t.enter(TokenType::Whitespace);
                while t.peek_char().map_or(false, is_space_or_tab) {
                    t.consume();
                }
                t.exit(TokenType::Whitespace);
            }
            Some(c) if is_line_end_char(c) => {
                t.enter(TokenType::LineEnding);
                t.consume_line_ending();
                t.exit(TokenType::LineEnding);
            }
            _ => break,
        }
    }
}

/// A link destination: `<enclosed>` or raw with balanced parentheses, capped
/// at `options.link_destination_balance` levels.
pub fn destination(t: &mut Tokenizer, tags: &DestinationTags) -> bool {
    match t.peek_char() {
        Some(b'<') => destination_enclosed(t, tags),
        None | Some(b')') => false,
        Some(c) if c <= b' ' || c == 0x7f => false,
        Some(_) => destination_raw(t, tags),
    }
}

fn destination_enclosed(t: &mut Tokenizer, tags: &DestinationTags) -> bool {
    t.enter(tags.destination);
    t.enter(tags.literal);
    t.enter(tags.literal_marker);
    t.consume();
    t.exit(tags.literal_marker);
    if t.peek_char() != Some(b'>') {
        t.enter(tags.string);
        loop {
            match t.peek_char() {
                None | Some(b'<') => return false,
                Some(c) if is_line_end_char(c) => return false,
                Some(b'>') => break,
                Some(b'\\') if t.peek_at(1).map_or(false, ispunct) => {
                    t.consume();
                    t.consume();
                }
                Some(_) => t.consume(),
            }
        }
        t.exit(tags.string);
    }
    t.enter(tags.literal_marker);
    t.consume();
    t.exit(tags.literal_marker);
    t.exit(tags.literal);
    t.exit(tags.destination);
    true
}

fn destination_raw(t: &mut Tokenizer, tags: &DestinationTags) -> bool {
    let cap = t.options.link_destination_balance;
    let mut balance: usize = 0;
    t.enter(tags.destination);
    t.enter(tags.raw);
    t.enter(tags.string);
    loop {
        match t.peek_char() {
            None => break,
            Some(b'(') => {
                balance += 1;
                if balance > cap {
                    return false;
                }
                t.consume();
            }
            Some(b')') => {
                if balance == 0 {
                    break;
                }
                balance -= 1;
                t.consume();
            }
            Some(b'\\') if t.peek_at(1).map_or(false, ispunct) => {
                t.consume();
                t.consume();
            }
            Some(c) if is_space_or_tab(c) || is_line_end_char(c) => break,
            // A bare control character is never part of a destination.
            Some(c) if c < 0x20 || c == 0x7f => return false,
            Some(_) => t.consume(),
        }
    }
    t.exit(tags.string);
    t.exit(tags.raw);
    t.exit(tags.destination);
    true
}

/// A title in `"…"`, `'…'`, or `(…)`.  May span lines but not blank lines.
pub fn title(t: &mut Tokenizer, tags: &TitleTags) -> bool {
    let closer = match t.peek_char() {
        Some(b'"') => b'"',
        Some(b'\'') => b'\'',
        Some(b'(') => b')',
        _ => return false,
    };
    t.enter(tags.title);
    t.enter(tags.marker);
    t.consume();
    t.exit(tags.marker);
    if t.peek_char() != Some(closer) {
        t.enter(tags.string);
        loop {
            match t.peek_char() {
                None => return false,
                Some(c) if c == closer => break,
                Some(b'(') if closer == b')' => return false,
                Some(b'\\') if t.peek_at(1).map_or(false, ispunct) => {
                    t.consume();
                    t.consume();
                }
                Some(c) if is_line_end_char(c) => {
                    t.consume_line_ending();
                    while t.peek_char().map_or(false, is_space_or_tab) {
                        t.consume();
                    }
                    if t.peek_char().map_or(true, is_line_end_char) {
                        return false;
                    }
                }
                Some(_) => t.consume(),
            }
        }
        t.exit(tags.string);
    }
    t.enter(tags.marker);
    t.consume();
    t.exit(tags.marker);
    t.exit(tags.title);
    true
}

/// A bracketed label with at least one non-whitespace character, capped at
/// `options.link_label_max` bytes of content.
pub fn label(t: &mut Tokenizer, tags: &LabelTags) -> bool {
    debug_assert_eq!(t.peek_char(), Some(b'['));
    t.enter(tags.label);
    t.enter(tags.marker);
    t.consume();
    t.exit(tags.marker);
    let mut size: usize = 0;
    let mut seen = false;
    t.enter(tags.string);
    loop {
        match t.peek_char() {
            None | Some(b'[') => return false,
            Some(b']') if !seen => return false,
            Some(b']') => break,
            Some(c) if is_line_end_char(c) => {
                t.consume_line_ending();
                size += 1;
                while t.peek_char().map_or(false, is_space_or_tab) {
                    t.consume();
                    size += 1;
                }
                if t.peek_char().map_or(false, is_line_end_char) {
                    return false;
                }
            }
            Some(b'\\') => {
                t.consume();
                size += 1;
                seen = true;
                if t.peek_char().map_or(false, ispunct) {
                    t.consume();
                    size += 1;
                }
            }
            Some(c) => {
                t.consume();
                size += 1;
                if !is_space_or_tab(c) {
                    seen = true;
                }
            }
        }
        if size > t.options.link_label_max {
            return false;
        }
    }
    t.exit(tags.string);
    t.enter(tags.marker);
    t.consume();
    t.exit(tags.marker);
    t.exit(tags.label);
    true
}
