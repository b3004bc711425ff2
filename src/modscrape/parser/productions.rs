//! Grammar productions, one per record field
//!
//! Productions are methods on [`Parser`](super::Parser), spread across `impl`
//! blocks by field family:
//!
//! - `codes` - module codes and parenthetical asides
//! - `credits` - title and credit units
//! - `requisites` - grade type, prerequisites, mutual exclusions
//! - `programmes` - programme restrictions and the course references they list
//! - `flags` - elective exclusions and the trailing description
//!
//! Return conventions: required productions return `Result<T, ParseError>` and
//! leave the cursor untouched on error. Optional productions return
//! `Result<Option<T>, ParseError>` (or an empty collection / `false` for
//! absence) and leave the cursor untouched unless they match.

mod codes;
mod credits;
mod flags;
mod programmes;
mod requisites;

use tracing::debug;

use crate::modscrape::ast::ParseError;
use crate::modscrape::lexer::{Phrase, TokenKind};

use super::Parser;

impl Parser<'_> {
    /// True when the cursor sits on the start of another field
    pub(crate) fn at_field_start(&self) -> bool {
        match self.cursor.current() {
            Some(token) if self.vocabulary.is_field_keyword(token.kind) => true,
            Some(token) if token.kind == TokenKind::Identifier => self
                .vocabulary
                .phrases()
                .iter()
                .any(|phrase| self.cursor.check_words(phrase.words())),
            _ => false,
        }
    }

    /// Match a field phrase and the colon that must follow it
    ///
    /// Returns `Ok(false)` without moving when the phrase is absent.
    pub(crate) fn field_header(
        &mut self,
        phrase: Phrase,
        rule: &'static str,
    ) -> Result<bool, ParseError> {
        if !self.cursor.match_words(phrase.words()) {
            return Ok(false);
        }
        self.cursor.consume(TokenKind::Colon, rule)?;
        debug!(paragraph = self.cursor.position().paragraph, field = rule, "field header");
        Ok(true)
    }

    /// Run an optional production atomically
    ///
    /// The cursor is restored when the production reports absence or fails.
    pub(crate) fn attempt<T, F>(&mut self, production: F) -> Result<Option<T>, ParseError>
    where
        F: FnOnce(&mut Self) -> Result<Option<T>, ParseError>,
    {
        let start = self.cursor.snapshot();
        let result = production(self);
        if !matches!(result, Ok(Some(_))) {
            self.cursor.restore(start);
        }
        result
    }

    /// Run a required production, restoring the cursor if it fails
    pub(crate) fn require<T, F>(&mut self, production: F) -> Result<T, ParseError>
    where
        F: FnOnce(&mut Self) -> Result<T, ParseError>,
    {
        let start = self.cursor.snapshot();
        let result = production(self);
        if result.is_err() {
            self.cursor.restore(start);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::modscrape::lexer::{tokenize, TokenKind};
    use crate::modscrape::parser::Parser;

    #[test]
    fn test_attempt_restores_on_absence_and_error() {
        let tokens = tokenize(["The quick brown fox"]).paragraphs;
        let mut parser = Parser::new(&tokens);

        let absent: Option<()> = parser
            .attempt(|p| {
                p.cursor.advance();
                p.cursor.advance();
                Ok(None)
            })
            .unwrap();
        assert_eq!(absent, None);
        assert_eq!(parser.position().token, 0);

        let failed = parser.attempt(|p| {
            p.cursor.advance();
            p.cursor.consume(TokenKind::Number, "test").map(|_| Some(()))
        });
        assert!(failed.is_err());
        assert_eq!(parser.position().token, 0);

        let matched = parser.attempt(|p| Ok(p.cursor.advance().cloned())).unwrap();
        assert_eq!(matched, Some(tokens[0][0].clone()));
        assert_eq!(parser.position().token, 1);
    }

    #[test]
    fn test_require_restores_on_error() {
        let tokens = tokenize(["The quick brown fox"]).paragraphs;
        let mut parser = Parser::new(&tokens);

        let failed = parser.require(|p| {
            p.cursor.advance();
            p.cursor.consume(TokenKind::Number, "test")
        });
        assert!(failed.is_err());
        assert_eq!(parser.position().token, 0);

        assert!(parser.require(|p| p.cursor.consume(TokenKind::Identifier, "test")).is_ok());
        assert_eq!(parser.position().token, 1);
    }
}
