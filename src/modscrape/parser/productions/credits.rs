//! Title and credit units

use crate::modscrape::ast::{Expected, ParseError};
use crate::modscrape::lexer::{join_literals, TokenKind};
use crate::modscrape::parser::{Located, Parser};

impl Parser<'_> {
    /// Everything between the module code and the credit units
    pub fn title(&mut self) -> Result<String, ParseError> {
        self.require(|parser| {
            let start = parser.cursor.position().token;
            while !parser.credit_units_ahead() {
                if parser.cursor.advance().is_none() {
                    return Err(parser.cursor.error("title", Expected::Shape("credit units")));
                }
            }
            let end = parser.cursor.position().token;
            let tokens = parser.cursor.paragraph_slice(start, end);
            Ok(join_literals(tokens, " "))
        })
    }

    /// `3.0 AU`, `.0 AU`, `3.5 ADM` or `8.0 BIE(CBE)`
    ///
    /// The value keeps its written form; conversion happens during assembly.
    pub fn au(&mut self) -> Result<Located<String>, ParseError> {
        self.require(|parser| {
            let position = parser.cursor.position();
            let value = parser
                .credit_value()
                .ok_or_else(|| parser.cursor.error("credit units", Expected::Shape("credit units")))?;
            if !(parser.cursor.match_kind(TokenKind::Au) || parser.cursor.match_kind(TokenKind::Identifier)) {
                return Err(parser.cursor.error("credit units", Expected::Kind(TokenKind::Au)));
            }
            if parser.cursor.check(TokenKind::LParen) {
                parser.miscellaneous()?;
            }
            Ok(Located { value, position })
        })
    }

    /// `[Number] . Number`, returned as written
    fn credit_value(&mut self) -> Option<String> {
        let start = self.cursor.snapshot();
        let whole = if self.cursor.check(TokenKind::Number) {
            self.cursor.advance().map(|token| token.literal.as_str()).unwrap_or_default()
        } else {
            ""
        };
        if !self.cursor.match_kind(TokenKind::Dot) || !self.cursor.check(TokenKind::Number) {
            self.cursor.restore(start);
            return None;
        }
        let fraction = self.cursor.advance().map(|token| token.literal.as_str())?;
        Some(format!("{}.{}", whole, fraction))
    }

    /// True when the credit units start at the cursor. Never moves the cursor.
    fn credit_units_ahead(&mut self) -> bool {
        let start = self.cursor.snapshot();
        let found = self.credit_value().is_some()
            && (self.cursor.check(TokenKind::Au) || self.cursor.check(TokenKind::Identifier));
        self.cursor.restore(start);
        found
    }
}
