//! CLI argument definitions for the course validator.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "course-validator",
    version,
    about = "Course catalog validator - check course sheets against catalog field rules",
    long_about = "Check course catalog sheets (CSV or spreadsheet) against catalog field rules.\n\n\
                  Headers are normalized to canonical field names, values are cleaned, and\n\
                  every failing cell is reported in a highlighted XLSX workbook."
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

    /// Include cell values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize, clean and validate a course sheet, then write the report.
    Validate(ValidateArgs),

    /// Show how the headers of a course sheet map to canonical fields.
    Columns(ColumnsArgs),

    /// List canonical fields and the rule checked for each.
    Fields,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Course sheet to validate (.csv, .xlsx, .xlsm, .xls, .ods).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report workbook path (default: validated_course_data_<timestamp>.xlsx
    /// next to the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the error records as JSON.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// TOML file overriding the built-in rule tables.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Check URL format only; do not contact any server.
    #[arg(long = "skip-url-check")]
    pub skip_url_check: bool,

    /// Stop validating once this many errors have been found.
    ///
    /// The report is still written and marked incomplete.
    #[arg(long = "max-errors", value_name = "N")]
    pub max_errors: Option<NonZeroUsize>,

    /// Validate without writing the report workbook.
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Number of error records listed in the console summary.
    #[arg(long = "show-errors", value_name = "N", default_value_t = 20)]
    pub show_errors: usize,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Course sheet whose header row is inspected.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// TOML file overriding the built-in column variants.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,
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
