//! The `[` and `![` opener constructs.
//!
//! A link opener is exactly four events, an image opener exactly six; the
//! resolve-to rewrite in `label_end` relies on those counts when it
//! relocates the marker events into the new label.

use crate::events::TokenType;
use crate::tokenizer::Tokenizer;

pub fn link(t: &mut Tokenizer) {
    debug_assert_eq!(t.peek_char(), Some(b'['));
    t.enter(TokenType::LabelLink);
    t.enter(TokenType::LabelMarker);
    t.consume();
    t.exit(TokenType::LabelMarker);
    t.exit(TokenType::LabelLink);
}

pub fn image(t: &mut Tokenizer) {
    debug_assert_eq!(t.peek_char(), Some(b'!'));
    debug_assert_eq!(t.peek_at(1), Some(b'['));
    t.enter(TokenType::LabelImage);
    t.enter(TokenType::LabelImageMarker);
    t.consume();
    t.exit(TokenType::LabelImageMarker);
    t.enter(TokenType::LabelMarker);
    t.consume();
    t.exit(TokenType::LabelMarker);
    t.exit(TokenType::LabelImage);
}
