//! Error types for tokenizing and parsing

use std::fmt;
use thiserror::Error;

use crate::modscrape::lexer::{Token, TokenKind};

/// Anomalies found while tokenizing
///
/// These never abort tokenization: the offending character is skipped and the
/// error is collected for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("paragraph {paragraph}, byte {offset}: unsupported character {character:?} (U+{:04X})", code_point(.character))]
    UnsupportedCharacter {
        paragraph: usize,
        offset: usize,
        character: char,
    },
}

impl LexError {
    /// Index of the paragraph the character was found in
    pub fn paragraph(&self) -> usize {
        match self {
            LexError::UnsupportedCharacter { paragraph, .. } => *paragraph,
        }
    }
}

/// What a production was looking for when it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Kind(TokenKind),
    /// A description of a shape spanning several tokens
    Shape(&'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Shape(description) => write!(f, "{}", description),
        }
    }
}

/// Errors that abort parsing of a paragraph
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A required token is missing or of the wrong kind
    ///
    /// Also raised when an optional field's leading keyword matched but its
    /// continuation did not: the keyword commits the paragraph to that rule.
    #[error(
        "paragraph {paragraph}, token {position}: {rule}: expected {expected} but found {}",
        describe_found(.found)
    )]
    UnexpectedToken {
        paragraph: usize,
        position: usize,
        rule: &'static str,
        expected: Expected,
        found: Option<Token>,
    },

    #[error("paragraph {paragraph}, token {position}: {rule}: cannot read {literal:?} as a number")]
    InvalidNumber {
        paragraph: usize,
        position: usize,
        rule: &'static str,
        literal: String,
    },

    #[error("paragraph {paragraph}, token {position}: year range {from}-{to} ends before it starts")]
    InvalidYearRange {
        paragraph: usize,
        position: usize,
        from: u32,
        to: u32,
    },
}

impl ParseError {
    /// Index of the paragraph the error belongs to
    pub fn paragraph(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { paragraph, .. }
            | ParseError::InvalidNumber { paragraph, .. }
            | ParseError::InvalidYearRange { paragraph, .. } => *paragraph,
        }
    }

    /// Token index within the paragraph
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::InvalidNumber { position, .. }
            | ParseError::InvalidYearRange { position, .. } => *position,
        }
    }
}

fn code_point(character: &char) -> u32 {
    u32::from(*character)
}

fn describe_found(found: &Option<Token>) -> String {
    match found {
        Some(token) if token.kind.is_variable() => format!("{} {:?}", token.kind, token.literal),
        Some(token) => token.kind.to_string(),
        None => "end of input".to_string(),
    }
}
