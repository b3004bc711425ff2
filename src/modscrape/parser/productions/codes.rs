//! Module codes and parenthetical asides

use crate::modscrape::ast::{Expected, ModuleCode, ParseError};
use crate::modscrape::lexer::TokenKind;
use crate::modscrape::parser::Parser;

impl Parser<'_> {
    /// `CODE`, `CODE(Corequisite)` or `CODE(any annotation)`
    ///
    /// An annotation other than "Corequisite" is kept verbatim in `misc`. Keyword
    /// tokens inside it are plain text.
    pub fn module_code(&mut self) -> Result<ModuleCode, ParseError> {
        self.require(|parser| {
            let token = parser.cursor.consume(TokenKind::ModuleCode, "module code")?;
            let code = ModuleCode::new(token.literal.clone());
            if !parser.cursor.check(TokenKind::LParen) {
                return Ok(code);
            }
            if parser.cursor.match_sequence(&[
                TokenKind::LParen,
                TokenKind::Corequisite,
                TokenKind::RParen,
            ]) {
                return Ok(code.corequisite());
            }
            let misc = parser.miscellaneous()?;
            Ok(code.with_misc(misc))
        })
    }

    /// `( anything )`, returning the interior joined with single spaces
    ///
    /// Nested parentheses are kept as part of the text.
    pub fn miscellaneous(&mut self) -> Result<String, ParseError> {
        self.require(|parser| {
            parser.cursor.consume(TokenKind::LParen, "parenthetical")?;
            let mut words = Vec::new();
            let mut depth = 0usize;
            loop {
                let token = parser.cursor.current().ok_or_else(|| {
                    parser
                        .cursor
                        .error("parenthetical", Expected::Kind(TokenKind::RParen))
                })?;
                match token.kind {
                    TokenKind::RParen if depth == 0 => break,
                    TokenKind::RParen => depth -= 1,
                    TokenKind::LParen => depth += 1,
                    _ => {}
                }
                words.push(token.literal.as_str());
                parser.cursor.advance();
            }
            parser.cursor.consume(TokenKind::RParen, "parenthetical")?;
            Ok(words.join(" "))
        })
    }

    /// Modules that are all required: `CODE`, then `& CODE` any number of times
    ///
    /// The word "and" also joins two codes when a code follows it.
    pub(crate) fn module_conjunction(&mut self) -> Result<Vec<ModuleCode>, ParseError> {
        let mut modules = vec![self.module_code()?];
        loop {
            if self.cursor.match_kind(TokenKind::And) {
                modules.push(self.module_code()?);
            } else if self.cursor.check_literal(TokenKind::Identifier, "and")
                && self
                    .cursor
                    .peek(1)
                    .is_some_and(|token| token.kind == TokenKind::ModuleCode)
            {
                self.cursor.advance();
                modules.push(self.module_code()?);
            } else {
                return Ok(modules);
            }
        }
    }
}
