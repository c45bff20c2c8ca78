//! term-yaml
//!
//! Generates check suites from YAML files and prints the methods and
//! supported dataset types of each suite.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use term_yaml::assembler::SuiteAssembler;
use term_yaml::core::SuiteSummary;
use term_yaml::logging::setup::{init_logging, LoggingConfig};
use term_yaml::prelude::LogConfig;
use term_yaml::registry::CheckRegistry;
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "term-yaml", version, about = "Generate check suites from YAML files")]
struct Args {
    /// YAML files to generate check suites from (repeatable)
    #[arg(
        short = 'y',
        long = "yaml",
        value_name = "FILE",
        required_unless_present = "list_checks"
    )]
    yaml_files: Vec<PathBuf>,

    /// Output format for the suite summaries
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level for term-yaml (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    log_level: Level,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// List the registered check implementations and exit
    #[arg(long)]
    list_checks: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(
        LoggingConfig::default()
            .with_crate_level(args.log_level)
            .with_json_format(args.json_logs),
    )
    .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    let registry = CheckRegistry::with_builtins();
    if args.list_checks {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let assembler =
        SuiteAssembler::new(registry).with_log_config(LogConfig::for_level(args.log_level));
    let suites = assembler
        .get_suites(&args.yaml_files)
        .context("failed to generate check suites")?;

    let summaries: Vec<SuiteSummary> = suites.values().map(|suite| suite.summary()).collect();
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => {
            for summary in &summaries {
                print_summary(summary);
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &SuiteSummary) {
    println!("{}", summary.name);
    for method in &summary.methods {
        println!("  {method}");
    }
    let supported = summary
        .supported_ds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    if supported.is_empty() {
        println!("  supported datasets: (none)");
    } else {
        println!("  supported datasets: {}", supported.join(", "));
    }
}
