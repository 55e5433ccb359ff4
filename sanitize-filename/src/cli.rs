//! This file defines the command-line interface (CLI) for the sanitize-filename
//! binary, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "sanitize-filename",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn arbitrary text into safe filenames",
    long_about = "sanitize-filename rewrites arbitrary text into a name that Windows, macOS and Linux all accept: separators, wildcards and control characters are replaced, '.' and '..' and Windows device names are removed, trailing dots and spaces are stripped, and the result is cut to at most 255 UTF-8 bytes.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `sanitize-filename` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes each name, printing one result per line.
    #[command(about = "Sanitize names given as arguments or read line by line from stdin.")]
    Sanitize(SanitizeCommand),

    /// Reports why names are not safe filenames, without rewriting them.
    #[command(about = "Check names and report every rule they violate.")]
    Check(CheckCommand),

    /// Lists the rule table in application order.
    #[command(about = "List the filename rules in the order they are applied.")]
    Rules,
}

/// Options shared by every command that builds a sanitizer.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Path to a YAML options file.
    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML options file (replacement, max_bytes).")]
    pub config: Option<PathBuf>,

    /// Text substituted for every violation.
    #[arg(
        long,
        short = 'r',
        value_name = "TEXT",
        env = "SANITIZE_FILENAME_REPLACEMENT",
        help = "Text substituted for every violation (default: remove)."
    )]
    pub replacement: Option<String>,

    /// Byte budget for each result.
    #[arg(long = "max-bytes", value_name = "N", help = "Maximum UTF-8 length of each result (at most 255).")]
    pub max_bytes: Option<usize>,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    #[command(flatten)]
    pub options: OptionArgs,

    /// Printed in place of a result that sanitizes to the empty string.
    #[arg(long, value_name = "NAME", help = "Name printed when a result would be empty.")]
    pub fallback: Option<String>,

    /// Names to sanitize (reads stdin lines if none are given).
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub options: OptionArgs,

    /// Print the report as JSON.
    #[arg(long, help = "Print the report as a JSON array.")]
    pub json: bool,

    /// Names to check (reads stdin lines if none are given).
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}
