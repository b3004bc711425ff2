//! Configuration loading
//!
//! `defaults/modscrape.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user files and CLI overrides on
//! top of those defaults via [`Loader`] before deserializing into
//! [`ModscrapeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/modscrape.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ModscrapeConfig {
    pub parse: ParseConfig,
    pub output: OutputConfig,
    pub lexer: LexerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub on_error: ErrorPolicy,
}

/// How a batch reacts to a paragraph that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first error
    Abort,
    /// Report the error and keep the remaining paragraphs
    Skip,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// A format name understood by [`ProcessingSpec::from_string`](crate::modscrape::processor::ProcessingSpec::from_string)
    pub format: String,
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexerConfig {
    pub report_unsupported: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ModscrapeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
