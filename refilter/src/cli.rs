// refilter/src/cli.rs
//! This file defines the command-line interface (CLI) for the refilter
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "refilter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Filter chat-model output through preset and custom regex rules",
    long_about = "Refilter applies an ordered set of regular-expression substitution rules to \
model output, stripping formatting artifacts (think-tags, Markdown syntax, HTML tags) or \
user-defined patterns before the text reaches an end user. Rules come from a configuration \
file plus optional ad-hoc preset toggles.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all log output.
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML or JSON filter configuration file.
    #[arg(
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Path to a YAML or JSON filter configuration file."
    )]
    pub config: Option<PathBuf>,

    /// Preset keys to enable on top of the loaded configuration.
    #[arg(
        long = "enable",
        global = true,
        value_name = "KEYS",
        value_delimiter = ',',
        help = "Comma-separated preset keys to enable on top of the configuration."
    )]
    pub enable: Vec<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `refilter` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filters stdin or a file through the active rule set.
    #[command(about = "Filters stdin or a file through the active rule set.")]
    Filter(FilterCommand),

    /// Prints the active rule count and display names.
    #[command(about = "Prints the active rule count and display names.")]
    Rules,

    /// Applies the active rules to ad-hoc input and reports before/after.
    #[command(about = "Applies the active rules to ad-hoc input and reports before/after.")]
    Test(TestCommand),
}

/// Arguments for the `filter` command.
#[derive(Parser, Debug)]
pub struct FilterCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(
        long,
        short = 'i',
        value_name = "FILE",
        help = "Read input from a specified file instead of stdin."
    )]
    pub input_file: Option<PathBuf>,

    /// Write filtered output to this file instead of stdout.
    #[arg(
        long,
        short = 'o',
        value_name = "FILE",
        help = "Write output to a specified file instead of stdout."
    )]
    pub output: Option<PathBuf>,
}

/// Arguments for the `test` command.
#[derive(Parser, Debug)]
pub struct TestCommand {
    /// Input text; literal `\n` sequences are expanded to real line breaks.
    pub input: String,

    /// Show a unified diff instead of the before/after sections.
    #[arg(long, short = 'D', help = "Show a unified diff of the changes.")]
    pub diff: bool,
}
