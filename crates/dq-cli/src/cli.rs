//! CLI argument definitions for the validation engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dq",
    version,
    about = "Data-quality validator - check tabular data against a data dictionary",
    long_about = "Validate CSV sheets against a rule dictionary.\n\n\
                  Runs per-cell validation rules (required, allowed values, numeric\n\
                  range, regex, past date, uniqueness), detects duplicate rows, and\n\
                  produces a pass/fail verdict with a detailed summary report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one or more CSV sheets against a data dictionary.
    Check(CheckArgs),

    /// List the supported validation rule types.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// CSV sheets to validate.
    #[arg(value_name = "SHEET", required = true)]
    pub sheets: Vec<PathBuf>,

    /// Path to the data dictionary JSON file.
    #[arg(long = "dictionary", short = 'd', value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Output directory for reports (default: directory of the first sheet).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Maximum number of data rows to validate per sheet.
    #[arg(long = "max-rows", value_name = "N")]
    pub max_rows: Option<usize>,

    /// Suppress all custom issues for a column when computing totals.
    ///
    /// Repeatable. Duplicate-row findings are never suppressed.
    #[arg(long = "override", value_name = "SHEET:COLUMN")]
    pub overrides: Vec<String>,

    /// Write the JSON report and the exported workbook CSVs.
    #[arg(long = "export")]
    pub export: bool,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
