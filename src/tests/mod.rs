use std::fmt::Write;

use crate::{
    is_balanced, reconstruct, tokenize_text, DefinitionSet, Event, EventKind, Options, TokenArena,
    TokenType,
};

mod links;
mod pathological;

fn compare_strs(output: &str, expected: &str, kind: &str, input: &str) {
    if output != expected {
        println!("Running {} test on {:?}", kind, input);
        println!("Got:");
        println!("==============================");
        println!("{}", output);
        println!("==============================");
        println!();
        println!("Expected:");
        println!("==============================");
        println!("{}", expected);
        println!("==============================");
        println!();
    }
    assert_eq!(output, expected);
}

/// Render the event log as an indented tree of `type start..end` lines,
/// with the input slice shown for text-bearing leaves.
fn tree(events: &[Event], input: &str) -> String {
    let mut out = String::new();
    let mut depth = 0;
    for event in events {
        match event.kind {
            EventKind::Enter => {
                let token = event.token.borrow();
                for _ in 0..depth {
                    out.push_str("  ");
                }
                write!(
                    out,
                    "{} {}..{}",
                    token.token_type.as_str(),
                    token.start.offset,
                    token.end.offset
                )
                .unwrap();
                if matches!(
                    token.token_type,
                    TokenType::Data
                        | TokenType::ReferenceString
                        | TokenType::ResourceDestinationString
                        | TokenType::ResourceTitleString
                ) {
                    write!(out, " {:?}", &input[token.start.offset..token.end.offset]).unwrap();
                }
                out.push('\n');
                depth += 1;
            }
            EventKind::Exit => depth -= 1,
        }
    }
    out
}

fn tokenize<'a>(arena: &'a TokenArena, input: &'a str, defined: &[&str]) -> Vec<Event<'a>> {
    let defined: DefinitionSet = defined.iter().collect();
    tokenize_text(arena, input, &defined, &Options::default())
}

/// Invariants every output stream must hold, whatever the input.
fn check_output(events: &[Event], input: &str) {
    assert!(is_balanced(events), "unbalanced event log for {:?}", input);
    assert_eq!(
        reconstruct(events, input),
        input,
        "round-trip failed for {:?}",
        input
    );
    let mut link_depth = 0;
    for event in events {
        let token_type = event.token.borrow().token_type;
        assert!(
            !matches!(
                token_type,
                TokenType::LabelImage | TokenType::LabelLink | TokenType::LabelEnd
            ),
            "unresolved label token in output for {:?}",
            input
        );
        if token_type == TokenType::Link {
            match event.kind {
                EventKind::Enter => {
                    assert_eq!(link_depth, 0, "nested link in output for {:?}", input);
                    link_depth += 1;
                }
                EventKind::Exit => link_depth -= 1,
            }
        }
    }
}

fn events_with(input: &str, defined: &[&str], expected: &str) {
    let arena = TokenArena::new();
    let events = tokenize(&arena, input, defined);
    check_output(&events, input);
    compare_strs(&tree(&events, input), expected, "event tree", input);
}

fn events(input: &str, expected: &str) {
    events_with(input, &[], expected);
}

fn count_tokens(events: &[Event], token_type: TokenType) -> usize {
    events
        .iter()
        .filter(|e| e.kind == EventKind::Enter && e.token.borrow().token_type == token_type)
        .count()
}
