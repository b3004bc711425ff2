//! Record assembly
//!
//! Productions hand back raw field values, some still in their written form.
//! [`RawFields::assemble`] coerces those into a [`Module`], filling in defaults
//! for every optional field that was absent.

use std::str::FromStr;

use crate::modscrape::ast::{Course, Module, ModuleCode, ParseError};
use crate::modscrape::parser::cursor::Position;

/// A value together with the cursor position it was read at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T> {
    pub value: T,
    pub position: Position,
}

/// Field values of one paragraph as the productions returned them
#[derive(Debug, Clone, PartialEq)]
pub struct RawFields {
    pub code: ModuleCode,
    pub title: String,
    pub credit_units: Located<String>,
    pub is_pass_fail: bool,
    pub prerequisite_year: Option<Located<String>>,
    pub prerequisite_module_sets: Vec<Vec<ModuleCode>>,
    pub prerequisite_exclusive_note: Option<String>,
    pub mutually_exclusive_with: Vec<ModuleCode>,
    pub excluded_programmes: Vec<Course>,
    pub excluded_programmes_by_admission_year: Vec<Course>,
    pub unavailable_as_prescribed_elective_for: Vec<Course>,
    pub not_offered_as_bde: bool,
    pub not_offered_as_ue: bool,
    pub description: String,
}

impl RawFields {
    pub fn assemble(self) -> Result<Module, ParseError> {
        let credit_units = parse_number(
            &self.credit_units.value,
            self.credit_units.position,
            "credit units",
        )?;
        let prerequisite_year = self
            .prerequisite_year
            .map(|year| parse_number(&year.value, year.position, "prerequisite year"))
            .transpose()?;

        Ok(Module {
            code: self.code,
            title: self.title,
            credit_units,
            mutually_exclusive_with: self.mutually_exclusive_with,
            prerequisite_year,
            prerequisite_module_sets: self.prerequisite_module_sets,
            prerequisite_exclusive_note: self.prerequisite_exclusive_note.unwrap_or_default(),
            excluded_programmes: self.excluded_programmes,
            excluded_programmes_by_admission_year: self.excluded_programmes_by_admission_year,
            unavailable_as_prescribed_elective_for: self.unavailable_as_prescribed_elective_for,
            excluded_as_broadening_deepening_elective: self.not_offered_as_bde,
            excluded_as_unrestricted_elective: self.not_offered_as_ue,
            is_pass_fail: self.is_pass_fail,
            free_text_description: self.description,
        })
    }
}

/// Parse a numeric literal, reporting failures at `position`
pub(crate) fn parse_number<T: FromStr>(
    literal: &str,
    position: Position,
    rule: &'static str,
) -> Result<T, ParseError> {
    literal.parse().map_err(|_| ParseError::InvalidNumber {
        paragraph: position.paragraph,
        position: position.token,
        rule,
        literal: literal.to_string(),
    })
}
