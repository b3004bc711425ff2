//! Two-dimensional cursor over tokenized paragraphs
//!
//! The cursor points at a token inside one paragraph. Paragraphs are never
//! concatenated: running off the end of a paragraph yields "no token", not the
//! first token of the next one.
//!
//! Matching primitives come in two flavours:
//!
//! ```text
//! `match_*`   advance on success, leave the cursor untouched on failure
//! `consume*`  advance on success, return a [`ParseError`] on failure
//! ```
//!
//! Sequences are atomic: if any step fails, the cursor goes back to where the
//! sequence started. `Parser::attempt` extends that to whole productions.

use crate::modscrape::ast::{Expected, ParseError};
use crate::modscrape::lexer::{Token, TokenKind};

/// A cursor location: paragraph index and token index within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub paragraph: usize,
    pub token: usize,
}

impl Position {
    pub fn new(paragraph: usize, token: usize) -> Self {
        Self { paragraph, token }
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    paragraphs: &'t [Vec<Token>],
    position: Position,
}

impl<'t> Cursor<'t> {
    pub fn new(paragraphs: &'t [Vec<Token>]) -> Self {
        Self {
            paragraphs,
            position: Position::default(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn snapshot(&self) -> Position {
        self.position
    }

    pub fn restore(&mut self, position: Position) {
        self.position = position;
    }

    /// Move to the first token of the next paragraph
    pub fn next_paragraph(&mut self) {
        self.position = Position::new(self.position.paragraph + 1, 0);
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    fn paragraph_tokens(&self) -> &'t [Token] {
        self.paragraphs
            .get(self.position.paragraph)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Tokens `start..end` of the current paragraph, clamped to its length
    pub fn paragraph_slice(&self, start: usize, end: usize) -> &'t [Token] {
        let tokens = self.paragraph_tokens();
        let end = end.min(tokens.len());
        tokens.get(start.min(end)..end).unwrap_or_default()
    }

    /// Token at the cursor, `None` at the end of the paragraph
    pub fn current(&self) -> Option<&'t Token> {
        self.paragraph_tokens().get(self.position.token)
    }

    /// Token `offset` places after the cursor
    pub fn peek(&self, offset: usize) -> Option<&'t Token> {
        self.paragraph_tokens().get(self.position.token + offset)
    }

    pub fn is_at_end(&self) -> bool {
        self.current().is_none()
    }

    /// Step over the current token and return it
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.current()?;
        self.position.token += 1;
        Some(token)
    }

    /// Check the current token's kind without moving
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|token| token.kind == kind)
    }

    pub fn check_literal(&self, kind: TokenKind, literal: &str) -> bool {
        self.current()
            .is_some_and(|token| token.kind == kind && token.literal == literal)
    }

    /// True when the identifiers `words` follow the cursor, without moving
    pub fn check_words(&self, words: &[&str]) -> bool {
        words.iter().enumerate().all(|(offset, word)| {
            self.peek(offset)
                .is_some_and(|token| token.kind == TokenKind::Identifier && token.literal == *word)
        })
    }

    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.position.token += 1;
            true
        } else {
            false
        }
    }

    pub fn match_literal(&mut self, kind: TokenKind, literal: &str) -> bool {
        if self.check_literal(kind, literal) {
            self.position.token += 1;
            true
        } else {
            false
        }
    }

    pub fn match_word(&mut self, word: &str) -> bool {
        self.match_literal(TokenKind::Identifier, word)
    }

    /// Match every kind in order, or nothing at all
    pub fn match_sequence(&mut self, kinds: &[TokenKind]) -> bool {
        let start = self.snapshot();
        for kind in kinds {
            if !self.match_kind(*kind) {
                self.restore(start);
                return false;
            }
        }
        true
    }

    /// Match a run of identifiers by literal, or nothing at all
    pub fn match_words(&mut self, words: &[&str]) -> bool {
        if self.check_words(words) {
            self.position.token += words.len();
            true
        } else {
            false
        }
    }

    /// Build an error describing what was found at the cursor
    pub fn error(&self, rule: &'static str, expected: Expected) -> ParseError {
        ParseError::UnexpectedToken {
            paragraph: self.position.paragraph,
            position: self.position.token,
            rule,
            expected,
            found: self.current().cloned(),
        }
    }

    pub fn consume(&mut self, kind: TokenKind, rule: &'static str) -> Result<&'t Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.position.token += 1;
                Ok(token)
            }
            _ => Err(self.error(rule, Expected::Kind(kind))),
        }
    }
}
