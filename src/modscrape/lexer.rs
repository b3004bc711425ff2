//! Lexer module for catalog text
//!
//! Each input line is one paragraph, the full text of one course. Paragraphs are
//! tokenized independently; nothing carries over from one line to the next.
//!
//! Tokenizing happens in two steps:
//! 1. logos scans punctuation and maximal letter/digit runs, skipping whitespace
//! 2. each run is classified through the [`Vocabulary`]: keyword, number, module code
//!    or plain identifier
//!
//! Characters logos cannot scan are skipped and reported as [`LexError`]s rather
//! than aborting the paragraph.
//!
//! [`LexError`]: crate::modscrape::ast::LexError

pub mod lexer_impl;
pub mod tokens;
pub mod vocabulary;

pub use lexer_impl::{tokenize, tokenize_line, LexOutput, Tokenizer};
pub use tokens::{join_literals, Token, TokenKind};
pub use vocabulary::{Phrase, Vocabulary};
