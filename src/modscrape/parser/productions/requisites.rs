//! Grade type, prerequisites and mutual exclusions

use crate::modscrape::ast::{ModuleCode, ParseError};
use crate::modscrape::lexer::{join_literals, Phrase, TokenKind};
use crate::modscrape::parser::{Located, Parser};

impl Parser<'_> {
    /// `Grade Type: Pass/Fail`
    ///
    /// Once `Grade Type` matched, anything other than `: Pass/Fail` is an error.
    pub fn pass_fail(&mut self) -> Result<bool, ParseError> {
        let matched = self.attempt(|parser| {
            if !parser
                .cursor
                .match_sequence(&[TokenKind::Grade, TokenKind::Type])
            {
                return Ok(None);
            }
            for kind in [
                TokenKind::Colon,
                TokenKind::Pass,
                TokenKind::Slash,
                TokenKind::Fail,
            ] {
                parser.cursor.consume(kind, "grade type")?;
            }
            Ok(Some(()))
        })?;
        Ok(matched.is_some())
    }

    /// `Prerequisite: Year N standing` or `Prerequisite: Study Year N standing`
    ///
    /// Returns the year as written. A prerequisite of another form is absent here.
    pub fn pre_requisite_year(&mut self) -> Result<Option<Located<String>>, ParseError> {
        self.attempt(|parser| {
            if !parser.prerequisite_header()? {
                return Ok(None);
            }
            if !(parser.cursor.match_word("Year") || parser.cursor.match_words(&["Study", "Year"])) {
                return Ok(None);
            }
            let position = parser.cursor.position();
            let year = parser.cursor.consume(TokenKind::Number, "prerequisite year")?;
            parser
                .cursor
                .consume(TokenKind::Standing, "prerequisite year")?;
            Ok(Some(Located {
                value: year.literal.clone(),
                position,
            }))
        })
    }

    /// `Prerequisite: A & B OR C`, one inner list per alternative
    ///
    /// Empty when there is no module-code prerequisite.
    pub fn pre_requisite_mods(&mut self) -> Result<Vec<Vec<ModuleCode>>, ParseError> {
        let sets = self.attempt(|parser| {
            if !parser.prerequisite_header()? || !parser.cursor.check(TokenKind::ModuleCode) {
                return Ok(None);
            }
            let mut sets = vec![parser.module_conjunction()?];
            while parser.cursor.match_kind(TokenKind::Or) {
                sets.push(parser.module_conjunction()?);
            }
            Ok(Some(sets))
        })?;
        Ok(sets.unwrap_or_default())
    }

    /// `Prerequisite:` followed by free text, e.g. "Only for Premier Scholars Programme students"
    ///
    /// The text runs over identifiers and numbers up to the next field. A bare
    /// `Prerequisite:` yields the empty note.
    pub fn pre_requisite_exclusives(&mut self) -> Result<Option<String>, ParseError> {
        self.attempt(|parser| {
            if !parser.prerequisite_header()? {
                return Ok(None);
            }
            let start = parser.cursor.position().token;
            while !parser.at_field_start()
                && (parser.cursor.check(TokenKind::Identifier) || parser.cursor.check(TokenKind::Number))
            {
                parser.cursor.advance();
            }
            let end = parser.cursor.position().token;
            Ok(Some(join_literals(
                parser.cursor.paragraph_slice(start, end),
                " ",
            )))
        })
    }

    /// `Mutually exclusive with: A, B, C`
    pub fn mutually_exclusive(&mut self) -> Result<Vec<ModuleCode>, ParseError> {
        let modules = self.attempt(|parser| {
            if !parser.field_header(Phrase::MutuallyExclusiveWith, "mutually exclusive")? {
                return Ok(None);
            }
            let mut modules = Vec::new();
            while parser.cursor.check(TokenKind::ModuleCode) {
                modules.push(parser.module_code()?);
                let before_comma = parser.cursor.snapshot();
                if parser.cursor.match_kind(TokenKind::Comma)
                    && !parser.cursor.check(TokenKind::ModuleCode)
                {
                    parser.cursor.restore(before_comma);
                }
            }
            Ok(Some(modules))
        })?;
        Ok(modules.unwrap_or_default())
    }

    /// `Prerequisite :`, the shared opening of the three prerequisite forms
    fn prerequisite_header(&mut self) -> Result<bool, ParseError> {
        if !self.cursor.match_kind(TokenKind::Prerequisite) {
            return Ok(false);
        }
        self.cursor.consume(TokenKind::Colon, "prerequisite")?;
        Ok(true)
    }
}
