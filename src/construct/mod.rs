//! The inline constructs and the resolver table shared between them.

pub mod label_end;
pub mod label_start;
pub mod partials;

use crate::events::{Event, TokenType};

/// A resolve-all pass over a contiguous event range.
pub type Resolver = for<'a> fn(&mut Vec<Event<'a>>);

/// Resolvers re-run over the text span of a freshly resolved link or image.
pub const INSIDE_SPAN: &[Resolver] = &[resolve_data];

pub fn resolve_inside_span(events: &mut Vec<Event>) {
    for resolver in INSIDE_SPAN {
        resolver(events);
    }
}

/// Merge runs of adjacent data tokens into one token.
pub fn resolve_data(events: &mut Vec<Event>) {
    let mut index = 0;
    let mut enter: Option<usize> = None;
    while index <= events.len() {
        let is_data =
            index < events.len() && events[index].token.borrow().token_type == TokenType::Data;
        if let Some(e) = enter {
            if !is_data {
                if index != e + 2 {
                    let end = events[index - 1].token.borrow().end;
                    events[e].token.borrow_mut().end = end;
                    events.drain(e + 2..index);
                    index = e + 2;
                }
                enter = None;
            }
        } else if is_data {
            enter = Some(index);
        }
        index += 1;
    }
}
