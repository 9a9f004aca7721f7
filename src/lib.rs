//! An event-stream tokenizer for CommonMark links and images.
//!
//! The input is scanned character by character into a flat log of
//! enter/exit events.  `[` and `![` emit opener groups; on `]` the
//! label-end construct decides between a resource, a full reference, a
//! collapsed reference, a shortcut, or nothing, and a successful match
//! rewrites the log in place into a `link` or `image` subtree.  Whatever
//! never matched is demoted to plain data in a final pass, so consumers
//! only ever see a well-formed stream.
//!
//! ```
//! use brackmark::{tokenize_text, DefinitionSet, Options, TokenArena, TokenType};
//!
//! let arena = TokenArena::new();
//! let defined = DefinitionSet::new();
//! let events = tokenize_text(&arena, "See [docs](/url \"hi\").", &defined, &Options::default());
//! assert!(events
//!     .iter()
//!     .any(|e| e.token.borrow().token_type == TokenType::Link));
//! ```
//!
//! Reference-style links resolve against a [`DefinitionSet`], which an
//! earlier pass provides (or [`definitions::harvest`] builds from leading
//! definition lines):
//!
//! ```
//! use brackmark::{tokenize_text, DefinitionSet, Options, TokenArena, TokenType};
//!
//! let arena = TokenArena::new();
//! let defined: DefinitionSet = ["guide"].into_iter().collect();
//! let events = tokenize_text(&arena, "read the [guide]", &defined, &Options::default());
//! assert!(events
//!     .iter()
//!     .any(|e| e.token.borrow().token_type == TokenType::Link));
//! ```

#[macro_use]
extern crate lazy_static;

pub mod construct;
mod ctype;
pub mod definitions;
pub mod events;
mod options;
mod scanners;
mod strings;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use crate::definitions::DefinitionSet;
pub use crate::events::{
    is_balanced, reconstruct, Event, EventKind, OpenerState, Point, Token, TokenArena, TokenRef,
    TokenType,
};
pub use crate::options::Options;
pub use crate::strings::normalize_label;
pub use crate::tokenizer::{tokenize_document, tokenize_text, Tokenizer};
