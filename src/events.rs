//! The event log: tokens, positions, and the enter/exit stream.

use std::cell::RefCell;
use std::ptr;

use typed_arena::Arena;

/// Arena that owns every [`Token`] for the duration of a parse.  Enter and
/// exit events share one allocation, so a flag written through either event
/// is seen through the other.
pub type TokenArena = Arena<RefCell<Token>>;

/// A shared handle to a token in the arena.
pub type TokenRef<'a> = &'a RefCell<Token>;

/// A position in the input: byte offset plus 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// What a token's opener is still allowed to do.
///
/// `Inactive` and `Balanced` are written by the closing construct and are
/// monotonic: an opener moves from `Open` to `Inactive` when a link resolves
/// around it, and to `Balanced` once a `]` has been tried against it and
/// failed.  A balanced opener is never looked at again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenerState {
    Open,
    Inactive,
    Balanced,
}

/// The kinds of token the tokenizer emits.
///
/// The serialized names (see [`TokenType::as_str`]) are stable; downstream
/// consumers match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Opening `![` of an image, awaiting its `]`.  Never present in final
    /// output; consumed by a match or demoted to `Data`.
    LabelImage,

    /// The `!` of an image opening.
    LabelImageMarker,

    /// Opening `[` of a link, awaiting its `]`.  Never present in final
    /// output; consumed by a match or demoted to `Data`.
    LabelLink,

    /// The `]` group closing a label.  Never present in final output.
    LabelEnd,

    /// A `[` or `]` marker.
    LabelMarker,

    /// Whole label, from opening marker through closing marker.
    Label,

    /// The text between a label's markers.
    LabelText,

    /// A resolved link.
    Link,

    /// A resolved image.
    Image,

    /// Literal text.
    Data,

    /// A `(destination "title")` suffix.
    Resource,

    /// The `(` or `)` of a resource.
    ResourceMarker,

    /// A resource's destination.
    ResourceDestination,

    /// An enclosed destination, `<` through `>`.
    ResourceDestinationLiteral,

    /// The `<` or `>` of an enclosed destination.
    ResourceDestinationLiteralMarker,

    /// A bare destination.
    ResourceDestinationRaw,

    /// The characters of a destination.
    ResourceDestinationString,

    /// A resource's title, markers included.
    ResourceTitle,

    /// The `"`, `'`, `(`, or `)` delimiting a title.
    ResourceTitleMarker,

    /// The characters of a title.
    ResourceTitleString,

    /// A `[label]` or `[]` reference suffix.
    Reference,

    /// The `[` or `]` of a reference.
    ReferenceMarker,

    /// The characters of a reference label.
    ReferenceString,

    /// A line ending.
    LineEnding,

    /// A run of spaces or tabs.
    Whitespace,
}

impl TokenType {
    /// The stable serialized name of this token type.
    pub fn as_str(&self) -> &'static str {
        match *self {
            TokenType::LabelImage => "labelImage",
            TokenType::LabelImageMarker => "labelImageMarker",
            TokenType::LabelLink => "labelLink",
            TokenType::LabelEnd => "labelEnd",
            TokenType::LabelMarker => "labelMarker",
            TokenType::Label => "label",
            TokenType::LabelText => "labelText",
            TokenType::Link => "link",
            TokenType::Image => "image",
            TokenType::Data => "data",
            TokenType::Resource => "resource",
            TokenType::ResourceMarker => "resourceMarker",
            TokenType::ResourceDestination => "resourceDestination",
            TokenType::ResourceDestinationLiteral => "resourceDestinationLiteral",
            TokenType::ResourceDestinationLiteralMarker => "resourceDestinationLiteralMarker",
            TokenType::ResourceDestinationRaw => "resourceDestinationRaw",
            TokenType::ResourceDestinationString => "resourceDestinationString",
            TokenType::ResourceTitle => "resourceTitle",
            TokenType::ResourceTitleMarker => "resourceTitleMarker",
            TokenType::ResourceTitleString => "resourceTitleString",
            TokenType::Reference => "reference",
            TokenType::ReferenceMarker => "referenceMarker",
            TokenType::ReferenceString => "referenceString",
            TokenType::LineEnding => "lineEnding",
            TokenType::Whitespace => "whitespace",
        }
    }
}

/// A span of input with a type and, for openers, a resolution state.
#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub start: Point,
    pub end: Point,
    pub opener_state: OpenerState,
}

pub fn make_token(
    arena: &TokenArena,
    token_type: TokenType,
    start: Point,
    end: Point,
) -> TokenRef<'_> {
    arena.alloc(RefCell::new(Token {
        token_type,
        start,
        end,
        opener_state: OpenerState::Open,
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Enter,
    Exit,
}

/// One step of the event stream.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    pub kind: EventKind,
    pub token: TokenRef<'a>,
}

impl<'a> Event<'a> {
    pub fn enter(token: TokenRef<'a>) -> Event<'a> {
        Event {
            kind: EventKind::Enter,
            token,
        }
    }

    pub fn exit(token: TokenRef<'a>) -> Event<'a> {
        Event {
            kind: EventKind::Exit,
            token,
        }
    }
}

/// Whether every enter has a matching exit of the same token, properly
/// nested.
pub fn is_balanced(events: &[Event]) -> bool {
    let mut stack: Vec<TokenRef> = vec![];
    for event in events {
        match event.kind {
            EventKind::Enter => stack.push(event.token),
            EventKind::Exit => match stack.pop() {
                Some(token) if ptr::eq(token, event.token) => (),
                _ => return false,
            },
        }
    }
    stack.is_empty()
}

/// Concatenate the input slices of every leaf token, in emission order.  A
/// well-formed log reproduces its input exactly.
pub fn reconstruct(events: &[Event], input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < events.len() {
        if events[i].kind == EventKind::Enter
            && i + 1 < events.len()
            && events[i + 1].kind == EventKind::Exit
            && ptr::eq(events[i].token, events[i + 1].token)
        {
            let token = events[i].token.borrow();
            out.push_str(&input[token.start.offset..token.end.offset]);
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}
