//! File processing API for catalog text
//!
//! Runs catalog files through a processing stage (token or module) and renders
//! the result in one of the output formats. Format names combine the two, e.g.
//! "token-simple" or "module-json"; [`available_formats`] lists them all.
//!
//! Input files hold one paragraph, the full text of one course, per line.
//! Blank lines are ignored, so paragraph indices count non-blank lines only.
//! Errors surfaced from here carry the 1-based file line as well.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::modscrape::ast::{LexError, Module, ParseError};
use crate::modscrape::config::{ErrorPolicy, ModscrapeConfig};
use crate::modscrape::lexer::{tokenize, Token};
use crate::modscrape::parser::Parser;

/// What data to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Module,
}

/// How to render it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

/// A complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "module-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "module" => ProcessingStage::Module,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "{} is not supported for the {} stage",
                spec.format.name(),
                spec.stage.name()
            )));
        }
        Ok(spec)
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Module,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Module,
                format: OutputFormat::Yaml,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
        ]
    }

    pub fn name(&self) -> String {
        format!("{}-{}", self.stage.name(), self.format.name())
    }
}

impl ProcessingStage {
    fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Module => "module",
        }
    }
}

impl OutputFormat {
    fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("invalid stage: {0}")]
    InvalidStage(String),
    #[error("invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] AtLine<ParseError>),
    #[error("failed to serialize output: {0}")]
    Serialize(String),
}

/// Knobs that affect processing, usually taken from [`ModscrapeConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingOptions {
    pub on_error: ErrorPolicy,
    pub pretty: bool,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Abort,
            pretty: true,
        }
    }
}

impl From<&ModscrapeConfig> for ProcessingOptions {
    fn from(config: &ModscrapeConfig) -> Self {
        Self {
            on_error: config.parse.on_error,
            pretty: config.output.pretty,
        }
    }
}

/// An error tied to the file line its paragraph came from
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {error}")]
pub struct AtLine<E> {
    /// 1-based line number in the input file
    pub line: usize,
    pub error: E,
}

/// Rendered output plus everything that went wrong without stopping the run
#[derive(Debug, Default)]
pub struct ProcessingReport {
    pub output: String,
    /// Paragraphs skipped under [`ErrorPolicy::Skip`]
    pub failures: Vec<AtLine<ParseError>>,
    pub unsupported: Vec<AtLine<LexError>>,
}

/// Split file content into paragraphs, one per non-blank line
///
/// Each paragraph is paired with its 1-based line number.
pub fn paragraphs(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect()
}

/// Process a catalog file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &ProcessingOptions,
) -> Result<ProcessingReport, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path).map_err(|source| ProcessingError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    process_source(&content, spec, options)
}

/// Process catalog text according to the given specification
pub fn process_source(
    content: &str,
    spec: &ProcessingSpec,
    options: &ProcessingOptions,
) -> Result<ProcessingReport, ProcessingError> {
    let (lines, texts): (Vec<usize>, Vec<&str>) = paragraphs(content).into_iter().unzip();
    let at_line = |paragraph: usize| lines.get(paragraph).copied().unwrap_or_default();

    let lexed = tokenize(texts);
    let mut report = ProcessingReport {
        unsupported: lexed
            .unsupported
            .into_iter()
            .map(|error| AtLine {
                line: at_line(error.paragraph()),
                error,
            })
            .collect(),
        ..Default::default()
    };

    report.output = match spec.stage {
        ProcessingStage::Token => format_tokens(&lexed.paragraphs, spec.format, options.pretty)?,
        ProcessingStage::Module => {
            let modules = match options.on_error {
                ErrorPolicy::Abort => {
                    Parser::new(&lexed.paragraphs).parse().map_err(|error| AtLine {
                        line: at_line(error.paragraph()),
                        error,
                    })?
                }
                ErrorPolicy::Skip => {
                    let mut modules = Vec::new();
                    for result in Parser::new(&lexed.paragraphs).parse_each() {
                        match result {
                            Ok(module) => modules.push(module),
                            Err(error) => {
                                let line = at_line(error.paragraph());
                                debug!(line, %error, "skipping paragraph");
                                report.failures.push(AtLine { line, error });
                            }
                        }
                    }
                    modules
                }
            };
            info!(
                modules = modules.len(),
                skipped = report.failures.len(),
                "processed catalog"
            );
            format_modules(&modules, spec.format, options.pretty)?
        }
    };
    Ok(report)
}

/// Format tokens according to the specified format
///
/// The simple format prints one paragraph per line.
fn format_tokens(
    paragraphs: &[Vec<Token>],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for tokens in paragraphs {
                for token in tokens {
                    result.push_str(&token.to_string());
                }
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Json => to_json(paragraphs, pretty),
        OutputFormat::Yaml => Err(ProcessingError::InvalidFormatType(
            "yaml is not supported for the token stage".to_string(),
        )),
    }
}

fn format_modules(
    modules: &[Module],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Json => to_json(modules, pretty),
        OutputFormat::Yaml => {
            serde_yaml::to_string(modules).map_err(|e| ProcessingError::Serialize(e.to_string()))
        }
        OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
            "simple is not supported for the module stage".to_string(),
        )),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, ProcessingError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| ProcessingError::Serialize(e.to_string()))
}
