//! Parser module for catalog text
//!
//! A recursive descent parser over the token sequences produced by the
//! [lexer](crate::modscrape::lexer). Each paragraph yields one [`Module`].
//!
//! ## Structure
//!
//! - `cursor` - the two-dimensional cursor and its match/consume primitives
//! - `productions` - one grammar production per record field, split across `impl Parser` blocks
//! - `assemble` - turns the raw field results into a `Module`
//!
//! ## Parse order
//!
//! Fields are tried in the order the catalog writes them:
//!
//! ```text
//! code, title, credit units, grade type, prerequisite (year, modules or note),
//! mutually exclusive, not available (programme, admission year, PE),
//! not offered (BDE, UE), description
//! ```
//!
//! Optional productions are atomic. They either match completely or leave the
//! cursor where it was, so trying one never disturbs the next. A production whose
//! leading keyword matched but whose continuation did not is an error for the
//! whole paragraph.

pub mod assemble;
pub mod cursor;
pub mod productions;

use tracing::{debug, info};

use crate::modscrape::ast::{Module, ParseError};
use crate::modscrape::lexer::{Token, Vocabulary};

pub use assemble::{Located, RawFields};
pub use cursor::{Cursor, Position};

pub struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) vocabulary: &'a Vocabulary,
}

impl<'a> Parser<'a> {
    pub fn new(paragraphs: &'a [Vec<Token>]) -> Self {
        Self::with_vocabulary(paragraphs, Vocabulary::global())
    }

    pub fn with_vocabulary(paragraphs: &'a [Vec<Token>], vocabulary: &'a Vocabulary) -> Self {
        Self {
            cursor: Cursor::new(paragraphs),
            vocabulary,
        }
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Parse the paragraph under the cursor into a module
    pub fn module(&mut self) -> Result<Module, ParseError> {
        let paragraph = self.cursor.position().paragraph;

        let code = self.module_code()?;
        let title = self.title()?;
        let credit_units = self.au()?;
        let is_pass_fail = self.pass_fail()?;

        let prerequisite_year = self.pre_requisite_year()?;
        let mut prerequisite_module_sets = Vec::new();
        let mut prerequisite_exclusive_note = None;
        if prerequisite_year.is_none() {
            prerequisite_module_sets = self.pre_requisite_mods()?;
            if prerequisite_module_sets.is_empty() {
                prerequisite_exclusive_note = self.pre_requisite_exclusives()?;
            }
        }

        let mutually_exclusive_with = self.mutually_exclusive()?;
        let excluded_programmes = self.not_available_to_programme()?;
        let excluded_programmes_by_admission_year = self.not_available_to_programme_with()?;
        let unavailable_as_prescribed_elective_for = self.not_available_as_pe()?;
        let not_offered_as_bde = self.not_offered_as_bde();
        let not_offered_as_ue = self.not_offered_as_ue();
        let description = self.description();

        let module = RawFields {
            code,
            title,
            credit_units,
            is_pass_fail,
            prerequisite_year,
            prerequisite_module_sets,
            prerequisite_exclusive_note,
            mutually_exclusive_with,
            excluded_programmes,
            excluded_programmes_by_admission_year,
            unavailable_as_prescribed_elective_for,
            not_offered_as_bde,
            not_offered_as_ue,
            description,
        }
        .assemble()?;

        debug!(paragraph, code = %module.code.code, title = %module.title, "parsed module");
        Ok(module)
    }

    /// Parse every paragraph, stopping at the first error
    pub fn parse(&mut self) -> Result<Vec<Module>, ParseError> {
        let mut modules = Vec::with_capacity(self.cursor.paragraph_count());
        while self.cursor.position().paragraph < self.cursor.paragraph_count() {
            modules.push(self.module()?);
            self.cursor.next_paragraph();
        }
        info!(modules = modules.len(), "parsed catalog");
        Ok(modules)
    }

    /// Parse every paragraph independently, one result per paragraph
    ///
    /// A failing paragraph does not affect the ones around it.
    pub fn parse_each(&mut self) -> Vec<Result<Module, ParseError>> {
        let mut results = Vec::with_capacity(self.cursor.paragraph_count());
        while self.cursor.position().paragraph < self.cursor.paragraph_count() {
            results.push(self.module());
            self.cursor.next_paragraph();
        }
        let failed = results.iter().filter(|result| result.is_err()).count();
        info!(
            modules = results.len() - failed,
            failed, "parsed catalog paragraphs independently"
        );
        results
    }
}

/// Tokenize and parse paragraphs in one go, stopping at the first error
pub fn parse_paragraphs<I, S>(lines: I) -> Result<Vec<Module>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let output = crate::modscrape::lexer::tokenize(lines);
    Parser::new(&output.paragraphs).parse()
}
