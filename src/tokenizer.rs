//! The host tokenizer: event-log ownership, position tracking, and the
//! backtracking `attempt` discipline the constructs are written against.

use crate::construct::{label_end, label_start};
use crate::ctype::ispunct;
use crate::definitions::{self, DefinitionSet};
use crate::events::{self, make_token, Event, Point, TokenArena, TokenRef, TokenType};
use crate::options::Options;

pub struct Tokenizer<'a, 'd, 'o> {
    arena: &'a TokenArena,
    pub input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    pub events: Vec<Event<'a>>,
    stack: Vec<TokenRef<'a>>,
    pub defined: &'d DefinitionSet,
    pub options: &'o Options,
}

/// A restore point for `attempt`.  Opener-state flags are deliberately not
/// part of it; they are monotonic and survive rollback.
struct Checkpoint {
    pos: usize,
    line: usize,
    column: usize,
    events_len: usize,
    stack_len: usize,
}

impl<'a, 'd, 'o> Tokenizer<'a, 'd, 'o> {
    pub fn new(
        arena: &'a TokenArena,
        input: &'a str,
        defined: &'d DefinitionSet,
        options: &'o Options,
    ) -> Self {
        Tokenizer {
            arena,
            input,
            pos: 0,
            line: 1,
            column: 1,
            events: vec![],
            stack: vec![],
            defined,
            options,
        }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn peek_char(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + n).copied()
    }

    pub fn now(&self) -> Point {
        Point {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Consume one byte.  Columns count bytes; a line ending resets them.
    pub fn consume(&mut self) {
        let bytes = self.input.as_bytes();
        assert!(self.pos < bytes.len(), "consume past end of input");
        let byte = bytes[self.pos];
        self.pos += 1;
        if byte == b'\n' || (byte == b'\r' && bytes.get(self.pos) != Some(&b'\n')) {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consume a `\n`, `\r`, or `\r\n`.
    pub fn consume_line_ending(&mut self) {
        if self.peek_char() == Some(b'\r') {
            self.consume();
        }
        if self.peek_char() == Some(b'\n') {
            self.consume();
        }
    }

    pub fn enter(&mut self, token_type: TokenType) -> TokenRef<'a> {
        let token = make_token(self.arena, token_type, self.now(), self.now());
        self.events.push(Event::enter(token));
        self.stack.push(token);
        token
    }

    pub fn exit(&mut self, token_type: TokenType) -> TokenRef<'a> {
        let token = self.stack.pop().expect("exit without matching enter");
        debug_assert_eq!(token.borrow().token_type, token_type);
        token.borrow_mut().end = self.now();
        self.events.push(Event::exit(token));
        token
    }

    /// Run a construct; on failure, unwind position and events to where the
    /// attempt began.
    pub fn attempt(&mut self, construct: impl FnOnce(&mut Self) -> bool) -> bool {
        let saved = self.checkpoint();
        if construct(self) {
            true
        } else {
            self.restore(saved);
            false
        }
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            line: self.line,
            column: self.column,
            events_len: self.events.len(),
            stack_len: self.stack.len(),
        }
    }

    fn restore(&mut self, saved: Checkpoint) {
        self.pos = saved.pos;
        self.line = saved.line;
        self.column = saved.column;
        self.events.truncate(saved.events_len);
        self.stack.truncate(saved.stack_len);
    }

    pub fn slice_serialize(&self, start: &Point, end: &Point) -> &'a str {
        &self.input[start.offset..end.offset]
    }

    /// One pass of the text loop: dispatch on the current character.
    fn step(&mut self) {
        match self.peek_char() {
            None => (),
            Some(b'[') => label_start::link(self),
            Some(b'!') if self.peek_at(1) == Some(b'[') => label_start::image(self),
            Some(b']') => {
                if self.attempt(label_end::tokenize) {
                    label_end::resolve_to(&mut self.events, self.arena);
                } else {
                    self.literal();
                }
            }
            Some(_) => self.data(),
        }
    }

    /// A single character as literal text, for a `]` that closed nothing.
    fn literal(&mut self) {
        self.enter(TokenType::Data);
        self.consume();
        self.exit(TokenType::Data);
    }

    /// A run of literal text up to the next construct boundary.  Escaped
    /// punctuation stays inside the run.
    fn data(&mut self) {
        self.enter(TokenType::Data);
        loop {
            match self.peek_char() {
                None => break,
                Some(b'\\') if self.peek_at(1).map_or(false, ispunct) => {
                    self.consume();
                    self.consume();
                }
                Some(b'[') | Some(b']') => break,
                Some(b'!') if self.peek_at(1) == Some(b'[') => break,
                Some(_) => self.consume(),
            }
        }
        self.exit(TokenType::Data);
    }
}

/// Tokenize one text run.  Definitions have already been harvested by an
/// earlier pass; the set is read-only here.
pub fn tokenize_text<'a>(
    arena: &'a TokenArena,
    input: &'a str,
    defined: &DefinitionSet,
    options: &Options,
) -> Vec<Event<'a>> {
    run(Tokenizer::new(arena, input, defined, options))
}

/// Harvest leading link definitions, then tokenize the remainder of the
/// input as a text run.  Event positions stay relative to `input`.
pub fn tokenize_document<'a>(
    arena: &'a TokenArena,
    input: &'a str,
    options: &Options,
) -> Vec<Event<'a>> {
    let (defined, offset) = definitions::harvest(input, options);
    let mut tokenizer = Tokenizer::new(arena, input, &defined, options);
    while tokenizer.pos < offset {
        tokenizer.consume();
    }
    run(tokenizer)
}

fn run<'a>(mut tokenizer: Tokenizer<'a, '_, '_>) -> Vec<Event<'a>> {
    while !tokenizer.eof() {
        tokenizer.step();
    }
    assert!(tokenizer.stack.is_empty(), "unclosed token at end of input");

    let mut events = tokenizer.events;
    label_end::resolve_all(&mut events);
    debug_assert!(events::is_balanced(&events));
    events
}
