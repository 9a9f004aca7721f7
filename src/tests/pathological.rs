use super::*;
use ntest::timeout;

#[test]
fn destination_balance_at_cap() {
    let input = format!("[a]({}b{})", "(".repeat(32), ")".repeat(32));
    let arena = TokenArena::new();
    let events = tokenize(&arena, &input, &[]);
    check_output(&events, &input);
    assert_eq!(count_tokens(&events, TokenType::Link), 1);
}

#[test]
fn destination_balance_past_cap() {
    let input = format!("[a]({}b{})", "(".repeat(33), ")".repeat(33));
    let arena = TokenArena::new();
    let events = tokenize(&arena, &input, &[]);
    check_output(&events, &input);
    assert_eq!(count_tokens(&events, TokenType::Link), 0);
}

// input: python3 -c 'n = 500; print("[" * n + "a")'
#[test]
#[timeout(4000)]
fn many_unmatched_openers() {
    let input = format!("{}a", "[".repeat(500));
    let arena = TokenArena::new();
    let events = tokenize(&arena, &input, &[]);
    check_output(&events, &input);
    assert_eq!(count_tokens(&events, TokenType::Link), 0);
    assert_eq!(count_tokens(&events, TokenType::Data), 501);
}

#[test]
#[timeout(4000)]
fn many_unmatched_closers() {
    let input = "]".repeat(500);
    let arena = TokenArena::new();
    let events = tokenize(&arena, &input, &[]);
    check_output(&events, &input);
    assert_eq!(count_tokens(&events, TokenType::Data), 500);
}

#[test]
#[timeout(4000)]
fn alternating_brackets() {
    let input = "[]".repeat(200);
    let arena = TokenArena::new();
    let events = tokenize(&arena, &input, &[]);
    check_output(&events, &input);
    assert_eq!(count_tokens(&events, TokenType::Link), 0);
}

#[test]
#[timeout(4000)]
fn deeply_nested_images() {
    let input = format!("{}a{}", "![".repeat(50), "](u)".repeat(50));
    let arena = TokenArena::new();
    let events = tokenize(&arena, &input, &[]);
    check_output(&events, &input);
    assert_eq!(count_tokens(&events, TokenType::Image), 50);
}

// A full-reference label longer than the cap never parses, so the opener
// falls through to the (undefined) shortcut and balances.
#[test]
fn oversized_label_is_no_reference() {
    let input = format!("[a][{}]", "x".repeat(1500));
    let arena = TokenArena::new();
    let events = tokenize(&arena, &input, &[]);
    check_output(&events, &input);
    assert_eq!(count_tokens(&events, TokenType::Link), 0);
}
