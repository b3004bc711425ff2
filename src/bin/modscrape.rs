//! Command-line interface for modscrape
//! Turns catalog text files into structured course records.
//!
//! Usage:
//!   modscrape parse `<path>` [--format F] [--on-error abort|skip] [--config FILE]
//!   modscrape tokens `<path>` [--format F]   - Print token streams, one paragraph per line
//!   modscrape list-formats                 - List all available output formats

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use modscrape::modscrape::config::{Loader, ModscrapeConfig};
use modscrape::modscrape::processor::{
    available_formats, process_file, ProcessingOptions, ProcessingReport, ProcessingSpec,
    ProcessingStage,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("modscrape=info")),
        )
        .init();

    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_process_command(parse_matches, ProcessingStage::Module),
        Some(("tokens", token_matches)) => handle_process_command(token_matches, ProcessingStage::Token),
        Some(("list-formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        _ => unreachable!("clap enforces a subcommand"),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn cli() -> Command {
    let path = Arg::new("path")
        .help("Path to the catalog file, one course per line")
        .required(true)
        .index(1);
    let format = Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (see list-formats)");
    let config = Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the built-in defaults");

    Command::new("modscrape")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts structured course records from catalog text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse every paragraph into a module record")
                .arg(path.clone())
                .arg(format.clone())
                .arg(
                    Arg::new("on-error")
                        .long("on-error")
                        .value_parser(["abort", "skip"])
                        .help("Stop at the first malformed paragraph or skip it"),
                )
                .arg(config.clone()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of every paragraph")
                .arg(path)
                .arg(format)
                .arg(config),
        )
        .subcommand(Command::new("list-formats").about("List all available output formats"))
}

/// Load the configuration, layering the user file and CLI flags over the defaults
fn load_config(matches: &ArgMatches) -> Result<ModscrapeConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Ok(Some(policy)) = matches.try_get_one::<String>("on-error") {
        loader = loader.set_override("parse.on_error", policy.as_str())?;
    }
    loader.build().context("failed to load configuration")
}

fn handle_process_command(matches: &ArgMatches, stage: ProcessingStage) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("missing path argument")?;
    let config = load_config(matches)?;

    let format = match (stage, matches.get_one::<String>("format")) {
        (_, Some(format)) => format.clone(),
        (ProcessingStage::Token, None) => "token-simple".to_string(),
        (ProcessingStage::Module, None) => config.output.format.clone(),
    };
    let spec = ProcessingSpec::from_string(&format).with_context(|| {
        format!(
            "unknown format '{}', available: {}",
            format,
            available_formats().join(", ")
        )
    })?;
    if spec.stage != stage {
        anyhow::bail!("format '{}' does not apply to this command", format);
    }

    let report = process_file(path, &spec, &ProcessingOptions::from(&config))
        .with_context(|| format!("failed to process {}", path))?;
    print_report(&report, &config);
    Ok(())
}

fn print_report(report: &ProcessingReport, config: &ModscrapeConfig) {
    print!("{}", report.output);
    if !report.output.is_empty() && !report.output.ends_with('\n') {
        println!();
    }
    if config.lexer.report_unsupported {
        for error in &report.unsupported {
            eprintln!("warning: {}", error);
        }
    }
    for error in &report.failures {
        eprintln!("skipped: {}", error);
    }
}

fn handle_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}
