//! Record types produced by the parser
//!
//! ## Modules
//!
//! - `module` - the `Module` output record and the `ModuleCode` / `Course` references it owns
//! - `error` - error types for tokenizing and parsing

pub mod error;
pub mod module;

pub use error::{Expected, LexError, ParseError};
pub use module::{Course, Module, ModuleCode, OPEN_ENDED_YEAR};
