//! Token definitions for catalog text
//!
//! This module defines the closed set of token kinds the tokenizer can produce.
//! Raw scanning is done by logos in [lexer_impl](super::lexer_impl); this module
//! only describes the classified tokens the parser works with.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every kind of token found in catalog text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    // Credit unit marker
    Au,

    // Grading scheme
    Grade,
    Type,
    Pass,
    Fail,

    // Requisites
    Prerequisite,
    Corequisite,
    Standing,
    Or,
    /// `&`, the conjunction between prerequisite modules
    And,

    // Admission year qualifier
    Admyr,

    // Punctuation
    Dot,
    Comma,
    Colon,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Dash,
    SingleQuote,
    DoubleQuote,
    Plus,
    Slash,
    Backtick,
    QuestionMark,

    // Classified word runs
    Number,
    Identifier,
    /// Two letters followed by four digits, e.g. SC1005
    ModuleCode,
}

impl TokenKind {
    /// Kebab-case name used in simple token output and error messages
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Au => "au",
            TokenKind::Grade => "grade",
            TokenKind::Type => "type",
            TokenKind::Pass => "pass",
            TokenKind::Fail => "fail",
            TokenKind::Prerequisite => "prerequisite",
            TokenKind::Corequisite => "corequisite",
            TokenKind::Standing => "standing",
            TokenKind::Or => "or",
            TokenKind::And => "and",
            TokenKind::Admyr => "admyr",
            TokenKind::Dot => "dot",
            TokenKind::Comma => "comma",
            TokenKind::Colon => "colon",
            TokenKind::Semicolon => "semicolon",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::LBrace => "lbrace",
            TokenKind::RBrace => "rbrace",
            TokenKind::LBracket => "lbracket",
            TokenKind::RBracket => "rbracket",
            TokenKind::Dash => "dash",
            TokenKind::SingleQuote => "single-quote",
            TokenKind::DoubleQuote => "double-quote",
            TokenKind::Plus => "plus",
            TokenKind::Slash => "slash",
            TokenKind::Backtick => "backtick",
            TokenKind::QuestionMark => "question-mark",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::ModuleCode => "module-code",
        }
    }

    /// The fixed spelling of keyword and punctuation kinds
    ///
    /// Returns `None` for kinds whose literal varies (numbers, identifiers, module codes).
    pub fn spelling(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Au => "AU",
            TokenKind::Grade => "Grade",
            TokenKind::Type => "Type",
            TokenKind::Pass => "Pass",
            TokenKind::Fail => "Fail",
            TokenKind::Prerequisite => "Prerequisite",
            TokenKind::Corequisite => "Corequisite",
            TokenKind::Standing => "standing",
            TokenKind::Or => "OR",
            TokenKind::And => "&",
            TokenKind::Admyr => "Admyr",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Dash => "-",
            TokenKind::SingleQuote => "'",
            TokenKind::DoubleQuote => "\"",
            TokenKind::Plus => "+",
            TokenKind::Slash => "/",
            TokenKind::Backtick => "`",
            TokenKind::QuestionMark => "?",
            TokenKind::Number | TokenKind::Identifier | TokenKind::ModuleCode => return None,
        };
        Some(text)
    }

    /// True for kinds whose literal carries information beyond the kind itself
    pub fn is_variable(&self) -> bool {
        self.spelling().is_none()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spelling() {
            Some(text) => write!(f, "'{}'", text),
            None => write!(f, "{}", self.name().replace('-', " ")),
        }
    }
}

/// A classified token: its kind plus the exact text it was scanned from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_variable() {
            write!(f, "<{}:{}>", self.kind.name(), self.literal)
        } else {
            write!(f, "<{}>", self.kind.name())
        }
    }
}

/// Join token literals with a separator
pub fn join_literals(tokens: &[Token], separator: &str) -> String {
    tokens
        .iter()
        .map(|token| token.literal.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
