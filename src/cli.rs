//! CLI argument definitions using clap with subcommand architecture.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pluggable lint engine with external tools and a heuristic fallback
#[derive(Parser, Debug)]
#[command(name = "lintfall")]
#[command(about = "Lint files with external check tools, falling back to built-in heuristics")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for lintfall
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint a file or an inline code string
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Report only the errors newly introduced between two file versions
    #[command(visible_alias = "d")]
    Diff(DiffArgs),

    /// List supported languages and their check commands
    Languages,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File path, or code text when the argument is not an existing file
    pub input: String,

    /// Language extension override (e.g. "py", "lua"); inferred from the
    /// file extension when omitted
    #[arg(short, long)]
    pub language: Option<String>,
}

/// Arguments for the diff command
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// The file before the edit
    pub original: PathBuf,

    /// The file after the edit
    pub updated: PathBuf,
}

/// Output format for lint reports
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `file:line:col: message` row per finding
    Text,
    /// The full report as pretty-printed JSON
    Json,
}
