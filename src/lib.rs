//! # modscrape
//!
//! Extracts structured course records from course-content catalog text.
//!
//! The catalog lists one course per paragraph in loosely structured prose. The
//! [lexer](modscrape::lexer) turns each paragraph into typed tokens and the
//! [parser](modscrape::parser) recovers one [`Module`](modscrape::ast::Module)
//! record per paragraph.

pub mod modscrape;

pub use modscrape::ast::{Course, Module, ModuleCode, ParseError};
pub use modscrape::lexer::{tokenize, Token, TokenKind};
pub use modscrape::parser::{parse_paragraphs, Parser};
