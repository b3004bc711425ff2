//! Module records
//!
//! All records are built once while parsing a single paragraph and are owned by
//! the resulting [`Module`]. Nothing is shared between paragraphs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound stored for an "onwards" year range, e.g. `(2018-onwards)`
pub const OPEN_ENDED_YEAR: u32 = 9999;

/// A reference to a module by its code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModuleCode {
    pub code: String,
    pub is_corequisite: bool,
    /// Parenthetical annotation kept verbatim, e.g. "Not Applicable to IEM"
    pub misc: String,
}

impl ModuleCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn corequisite(mut self) -> Self {
        self.is_corequisite = true;
        self
    }

    pub fn with_misc(mut self, misc: impl Into<String>) -> Self {
        self.misc = misc.into();
        self
    }
}

impl fmt::Display for ModuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        if self.is_corequisite {
            write!(f, "(Corequisite)")?;
        }
        if !self.misc.is_empty() {
            write!(f, "({})", self.misc)?;
        }
        Ok(())
    }
}

/// A reference to a programme, optionally scoped by entry route and cohort years
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    /// `Some(true)` for "(Direct Entry)", `Some(false)` for "(Non Direct Entry)"
    pub is_direct_entry: Option<bool>,
    pub from_year: Option<u32>,
    /// [`OPEN_ENDED_YEAR`] for "onwards"
    pub to_year: Option<u32>,
    pub alt_name: Option<String>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn direct_entry(mut self, is_direct_entry: bool) -> Self {
        self.is_direct_entry = Some(is_direct_entry);
        self
    }

    pub fn years(mut self, from_year: u32, to_year: Option<u32>) -> Self {
        self.from_year = Some(from_year);
        self.to_year = to_year;
        self
    }

    pub fn alt_name(mut self, alt_name: impl Into<String>) -> Self {
        self.alt_name = Some(alt_name.into());
        self
    }
}

/// One course record recovered from a catalog paragraph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Module {
    pub code: ModuleCode,
    pub title: String,
    pub credit_units: f64,
    pub mutually_exclusive_with: Vec<ModuleCode>,
    pub prerequisite_year: Option<u32>,
    /// Outer list: alternatives (OR). Inner lists: modules all required (AND).
    pub prerequisite_module_sets: Vec<Vec<ModuleCode>>,
    pub prerequisite_exclusive_note: String,
    pub excluded_programmes: Vec<Course>,
    pub excluded_programmes_by_admission_year: Vec<Course>,
    pub unavailable_as_prescribed_elective_for: Vec<Course>,
    pub excluded_as_broadening_deepening_elective: bool,
    pub excluded_as_unrestricted_elective: bool,
    pub is_pass_fail: bool,
    pub free_text_description: String,
}
