//! Main module for modscrape library functionality
//!
//! Data flows through the submodules in order:
//!
//! ```text
//! paragraphs -> lexer -> token sequences -> parser -> assembler -> `Module` records
//! ```
//!
//! The processor and config modules wrap that flow for the command-line tool.

pub mod ast;
pub mod config;
pub mod lexer;
pub mod parser;
pub mod processor;
