//! CLI argument definitions for the people data mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pdm",
    version,
    about = "People Data Mapper - import contacts from CSV files",
    long_about = "Import people from CSV files.\n\n\
                  Columns are matched to the standard fields (name, company, phone, email)\n\
                  by header keywords; the suggestions can be overridden per column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow cell values (names, emails, phones) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import one or more CSV files into a single session and show the records.
    Import(ImportArgs),

    /// Show the columns of a CSV file and the suggested field for each.
    Suggest(SuggestArgs),

    /// List the standard fields columns can be mapped to.
    Fields,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// CSV files to import, in order. Records accumulate across files.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Map a column to a field (e.g. --map "Work Phone=phone"). Repeatable.
    #[arg(long = "map", value_name = "HEADER=FIELD")]
    pub map: Vec<String>,

    /// Ignore a column even if a field was suggested for it. Repeatable.
    #[arg(long = "ignore", value_name = "HEADER")]
    pub ignore: Vec<String>,

    /// JSON object of header to field assignments, applied before --map.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Start from an empty mapping instead of the suggestions.
    #[arg(long = "no-suggestions")]
    pub no_suggestions: bool,

    /// Only show records whose name, company, email or phone contains TERM.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Output format for the records.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write the records to a file instead of stdout (json and csv only).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// CSV file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the upload response as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Csv,
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
