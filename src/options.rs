//! Configuration for the tokenizer.

#[cfg(feature = "bon")]
use bon::Builder;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
pub struct Options {
    /// How many levels of balanced parentheses a raw link destination may
    /// contain before the resource recognizer gives up.
    ///
    /// ```rust
    /// # use brackmark::{tokenize_text, DefinitionSet, Options, TokenArena, TokenType};
    /// let arena = TokenArena::new();
    /// let defined = DefinitionSet::new();
    /// let events = tokenize_text(&arena, "[a]((b))", &defined, &Options::default());
    /// assert!(events
    ///     .iter()
    ///     .any(|e| e.token.borrow().token_type == TokenType::Link));
    /// ```
    #[cfg_attr(feature = "bon", builder(default = 32))]
    pub link_destination_balance: usize,

    /// The longest reference label the label recognizer will scan, in bytes.
    #[cfg_attr(feature = "bon", builder(default = 999))]
    pub link_label_max: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            link_destination_balance: 32,
            link_label_max: 999,
        }
    }
}
