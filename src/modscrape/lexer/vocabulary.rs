//! The keyword and phrase table shared by the tokenizer and the parser
//!
//! Single keywords (`AU`, `Prerequisite`, ...) get their own token kind. Multi-word
//! field markers such as "Mutually exclusive with" are not tokenized as a unit:
//! each word is an ordinary identifier and the parser recognises the phrase as an
//! identifier sequence. That keeps the words usable as plain text in titles and
//! descriptions.
//!
//! The table is built once per process ([`Vocabulary::global`]) and only ever read.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::tokens::TokenKind;

static NUMBER_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static MODULE_CODE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Alphabetic}{2}[0-9]{4}$").unwrap());

static GLOBAL: Lazy<Vocabulary> = Lazy::new(Vocabulary::new);

/// Multi-word markers that open an optional field of a module paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phrase {
    MutuallyExclusiveWith,
    NotAvailableToProgramme,
    NotAvailableToAllProgrammeWith,
    NotAvailableAsPeToProgramme,
    NotOfferedAsBde,
    NotOfferedAsUe,
}

impl Phrase {
    pub const ALL: [Phrase; 6] = [
        Phrase::MutuallyExclusiveWith,
        Phrase::NotAvailableToProgramme,
        Phrase::NotAvailableToAllProgrammeWith,
        Phrase::NotAvailableAsPeToProgramme,
        Phrase::NotOfferedAsBde,
        Phrase::NotOfferedAsUe,
    ];

    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Phrase::MutuallyExclusiveWith => &["Mutually", "exclusive", "with"],
            Phrase::NotAvailableToProgramme => &["Not", "available", "to", "Programme"],
            Phrase::NotAvailableToAllProgrammeWith => {
                &["Not", "available", "to", "all", "Programme", "with"]
            }
            Phrase::NotAvailableAsPeToProgramme => &["Not", "available", "as", "PE", "to", "Programme"],
            Phrase::NotOfferedAsBde => &[
                "Not",
                "offered",
                "as",
                "Broadening",
                "and",
                "Deepening",
                "Elective",
            ],
            Phrase::NotOfferedAsUe => &["Not", "offered", "as", "Unrestricted", "Elective"],
        }
    }

    pub fn text(&self) -> String {
        self.words().join(" ")
    }
}

/// Read-only vocabulary consulted while tokenizing and parsing
#[derive(Debug, Clone)]
pub struct Vocabulary {
    keywords: HashMap<&'static str, TokenKind>,
    phrases: Vec<Phrase>,
    /// Keywords that open a field; free-text runs stop in front of them
    field_keywords: Vec<TokenKind>,
}

impl Vocabulary {
    pub fn new() -> Self {
        let keywords = [
            TokenKind::Au,
            TokenKind::Grade,
            TokenKind::Type,
            TokenKind::Pass,
            TokenKind::Fail,
            TokenKind::Prerequisite,
            TokenKind::Corequisite,
            TokenKind::Or,
            TokenKind::Standing,
            TokenKind::Admyr,
        ]
        .into_iter()
        .filter_map(|kind| kind.spelling().map(|text| (text, kind)))
        .collect();

        Self {
            keywords,
            phrases: Phrase::ALL.to_vec(),
            field_keywords: vec![TokenKind::Prerequisite, TokenKind::Grade],
        }
    }

    /// The process-wide instance
    pub fn global() -> &'static Vocabulary {
        &GLOBAL
    }

    /// Look up an exact keyword spelling
    pub fn keyword(&self, word: &str) -> Option<TokenKind> {
        self.keywords.get(word).copied()
    }

    /// Classify a maximal run of letters and digits
    ///
    /// Priority: keyword, then number, then module code, then identifier.
    pub fn classify(&self, word: &str) -> TokenKind {
        if let Some(kind) = self.keyword(word) {
            kind
        } else if NUMBER_SHAPE.is_match(word) {
            TokenKind::Number
        } else if MODULE_CODE_SHAPE.is_match(word) {
            TokenKind::ModuleCode
        } else {
            TokenKind::Identifier
        }
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn is_field_keyword(&self, kind: TokenKind) -> bool {
        self.field_keywords.contains(&kind)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
