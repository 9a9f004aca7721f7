#![no_main]

use brackmark::{
    definitions, is_balanced, reconstruct, tokenize_text, Options, TokenArena, TokenType,
};
use libfuzzer_sys::fuzz_target;

// Tokenize arbitrary text and hold the output to the stream invariants:
// balanced nesting, byte-exact round-trip, and no label bookkeeping tokens
// surviving into the result.
fuzz_target!(|input: &str| {
    let options = Options::default();
    let arena = TokenArena::new();
    let (defined, offset) = definitions::harvest(input, &options);
    let rest = &input[offset..];
    let events = tokenize_text(&arena, rest, &defined, &options);

    assert!(is_balanced(&events));
    assert_eq!(reconstruct(&events, rest), rest);
    for event in &events {
        let token_type = event.token.borrow().token_type;
        assert!(!matches!(
            token_type,
            TokenType::LabelImage | TokenType::LabelLink | TokenType::LabelEnd
        ));
    }
});
