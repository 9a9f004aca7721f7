//! The label-end construct: decides what a `]` closes, and rewrites the
//! event log when it closes something.
//!
//! On `]` the recognizer looks back for the nearest opener that has not
//! already failed, then tries suffixes in CommonMark priority order:
//! resource, full reference, collapsed reference, shortcut.  A successful
//! match is followed by [`resolve_to`], which splices the range from opener
//! to end of log into a `link` or `image` subtree.  [`resolve_all`] runs
//! once at the end and demotes every surviving opener and closer to plain
//! data.

use crate::construct::partials::{self, DestinationTags, LabelTags, TitleTags};
use crate::construct::resolve_inside_span;
use crate::events::{make_token, Event, EventKind, OpenerState, TokenArena, TokenType};
use crate::strings::{is_line_end_char, is_space_or_tab};
use crate::tokenizer::Tokenizer;

const RESOURCE_DESTINATION: DestinationTags = DestinationTags {
    destination: TokenType::ResourceDestination,
    literal: TokenType::ResourceDestinationLiteral,
    literal_marker: TokenType::ResourceDestinationLiteralMarker,
    raw: TokenType::ResourceDestinationRaw,
    string: TokenType::ResourceDestinationString,
};

const RESOURCE_TITLE: TitleTags = TitleTags {
    title: TokenType::ResourceTitle,
    marker: TokenType::ResourceTitleMarker,
    string: TokenType::ResourceTitleString,
};

const REFERENCE_LABEL: LabelTags = LabelTags {
    label: TokenType::Reference,
    marker: TokenType::ReferenceMarker,
    string: TokenType::ReferenceString,
};

/// The recognizer proper.  Runs under `attempt`: on failure the emitted
/// label-end events unwind, but opener-state writes survive.
pub fn tokenize(t: &mut Tokenizer) -> bool {
    debug_assert_eq!(t.peek_char(), Some(b']'));

    // Nearest opener not yet balanced by a failed close.
    let mut label_start = None;
    for event in t.events.iter().rev() {
        if event.kind != EventKind::Enter {
            continue;
        }
        let token = event.token.borrow();
        if matches!(
            token.token_type,
            TokenType::LabelImage | TokenType::LabelLink
        ) && token.opener_state != OpenerState::Balanced
        {
            label_start = Some(event.token);
            break;
        }
    }
    let label_start = match label_start {
        Some(label_start) => label_start,
        None => return false,
    };

    // An opener inside an already-resolved link cannot close.  Balancing it
    // keeps this `]` from being tried against it ever again.
    if label_start.borrow().opener_state == OpenerState::Inactive {
        label_start.borrow_mut().opener_state = OpenerState::Balanced;
        return false;
    }

    // Would the text between the brackets be a defined shortcut?
    let id_start = label_start.borrow().end;
    let id_end = t.now();
    let defined = t.defined.contains(t.slice_serialize(&id_start, &id_end));

    t.enter(TokenType::LabelEnd);
    t.enter(TokenType::LabelMarker);
    t.consume();
    t.exit(TokenType::LabelMarker);
    t.exit(TokenType::LabelEnd);

    // Resource beats full reference beats collapsed beats shortcut; an
    // undefined identifier matches nothing.
    let matched = match t.peek_char() {
        Some(b'(') => t.attempt(resource) || defined,
        Some(b'[') => t.attempt(reference_full) || (defined && t.attempt(reference_collapsed)),
        _ => defined,
    };

    if matched {
        true
    } else {
        label_start.borrow_mut().opener_state = OpenerState::Balanced;
        false
    }
}

/// The `(destination "title")` suffix.
fn resource(t: &mut Tokenizer) -> bool {
    debug_assert_eq!(t.peek_char(), Some(b'('));
    t.enter(TokenType::Resource);
    t.enter(TokenType::ResourceMarker);
    t.consume();
    t.exit(TokenType::ResourceMarker);
    partials::whitespace(t);

    if t.peek_char() != Some(b')') {
        if !partials::destination(t, &RESOURCE_DESTINATION) {
            return false;
        }
        // A title needs whitespace between it and the destination.
        if t.peek_char()
            .map_or(false, |c| is_space_or_tab(c) || is_line_end_char(c))
        {
            partials::whitespace(t);
            if matches!(t.peek_char(), Some(b'"') | Some(b'\'') | Some(b'(')) {
                if !partials::title(t, &RESOURCE_TITLE) {
                    return false;
                }
                partials::whitespace(t);
            }
        }
    }

    if t.peek_char() != Some(b')') {
        return false;
    }
    t.enter(TokenType::ResourceMarker);
    t.consume();
    t.exit(TokenType::ResourceMarker);
    t.exit(TokenType::Resource);
    true
}

/// The `[label]` suffix; the label must be a known definition.
fn reference_full(t: &mut Tokenizer) -> bool {
    debug_assert_eq!(t.peek_char(), Some(b'['));
    if !partials::label(t, &REFERENCE_LABEL) {
        return false;
    }
    let (start, end) = {
        let token = t
            .events
            .last()
            .expect("label factory emits events")
            .token
            .borrow();
        (token.start, token.end)
    };
    let raw = t.slice_serialize(&start, &end);
    t.defined.contains(&raw[1..raw.len() - 1])
}

/// The `[]` suffix.  Only attempted once the opener's own text is known to
/// be a defined identifier.
fn reference_collapsed(t: &mut Tokenizer) -> bool {
    debug_assert_eq!(t.peek_char(), Some(b'['));
    t.enter(TokenType::Reference);
    t.enter(TokenType::ReferenceMarker);
    t.consume();
    t.exit(TokenType::ReferenceMarker);
    if t.peek_char() != Some(b']') {
        return false;
    }
    t.enter(TokenType::ReferenceMarker);
    t.consume();
    t.exit(TokenType::ReferenceMarker);
    t.exit(TokenType::Reference);
    true
}

/// Rewrite the range from the matched opener through the end of the log
/// into a `link` or `image` subtree.
pub fn resolve_to<'a>(events: &mut Vec<Event<'a>>, arena: &'a TokenArena) {
    // Walk backwards for the closer, then its opener.  Link openers passed
    // while unwinding go inactive: no links inside links.
    let mut open = None;
    let mut close = None;
    let mut offset = 0;
    let mut index = events.len();
    while index > 0 {
        index -= 1;
        let event = events[index];
        let token_type = event.token.borrow().token_type;
        if open.is_some() {
            if token_type == TokenType::Link
                || (token_type == TokenType::LabelLink
                    && event.token.borrow().opener_state == OpenerState::Inactive)
            {
                // The rest of the log was claimed by an earlier resolve.
                break;
            }
            if event.kind == EventKind::Enter && token_type == TokenType::LabelLink {
                // Balanced openers are already dead; only live ones go
                // inactive.
                let mut token = event.token.borrow_mut();
                if token.opener_state == OpenerState::Open {
                    token.opener_state = OpenerState::Inactive;
                }
            }
        } else if close.is_some() {
            if event.kind == EventKind::Enter
                && matches!(
                    token_type,
                    TokenType::LabelImage | TokenType::LabelLink
                )
                && event.token.borrow().opener_state != OpenerState::Balanced
            {
                open = Some(index);
                if token_type == TokenType::LabelImage {
                    offset = 2;
                    break;
                }
            }
        } else if token_type == TokenType::LabelEnd {
            close = Some(index);
        }
    }
    let open = open.expect("label end without matching opener");
    let close = close.expect("label end missing from event log");

    let group_type = if events[open].token.borrow().token_type == TokenType::LabelLink {
        TokenType::Link
    } else {
        TokenType::Image
    };
    let group_start = events[open].token.borrow().start;
    let group_end = events[events.len() - 1].token.borrow().end;
    let label_end_point = events[close].token.borrow().end;
    let text_start = events[open + offset + 2].token.borrow().end;
    let text_end = events[close - 2].token.borrow().start;

    let group = make_token(arena, group_type, group_start, group_end);
    let label = make_token(arena, TokenType::Label, group_start, label_end_point);
    let text = make_token(arena, TokenType::LabelText, text_start, text_end);

    let mut media: Vec<Event<'a>> = Vec::with_capacity(events.len() - open + 8);
    media.push(Event::enter(group));
    media.push(Event::enter(label));
    // The opener's marker events move inside the new label.
    media.extend_from_slice(&events[open + 1..open + offset + 3]);
    media.push(Event::enter(text));
    // Re-run the inline resolvers over the text span; label openers inside
    // it were neutralized above.
    let mut inside: Vec<Event<'a>> = events[open + offset + 4..close - 3].to_vec();
    resolve_inside_span(&mut inside);
    media.append(&mut inside);
    media.push(Event::exit(text));
    media.push(events[close - 2]);
    media.push(events[close - 1]);
    media.push(Event::exit(label));
    // The resource or reference suffix, if any.
    media.extend_from_slice(&events[close + 1..]);
    media.push(Event::exit(group));

    drop(events.splice(open.., media));
}

/// Demote every surviving opener and closer group to a single data token.
pub fn resolve_all(events: &mut Vec<Event>) {
    let mut index = 0;
    while index < events.len() {
        let token = events[index].token;
        let token_type = token.borrow().token_type;
        if matches!(
            token_type,
            TokenType::LabelImage | TokenType::LabelLink | TokenType::LabelEnd
        ) {
            // Drop the marker events; the group token itself becomes text.
            let count = if token_type == TokenType::LabelImage {
                4
            } else {
                2
            };
            events.drain(index + 1..index + 1 + count);
            let mut token = token.borrow_mut();
            token.token_type = TokenType::Data;
            token.opener_state = OpenerState::Open;
            index += 1;
        }
        index += 1;
    }
}
