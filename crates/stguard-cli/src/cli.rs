//! CLI definitions for stguard.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "stguard",
    version,
    about = "Static validator for IEC 61131-3 Structured Text",
    infer_subcommands = true,
    after_help = "Examples:\n  stguard check src/main.st\n  stguard check 'src/**/*.st' --format json\n  cat program.st | stguard check --stdin\n  stguard rules"
)]
pub struct Cli {
    /// Show debug logging on stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate Structured Text files.
    #[command(
        after_help = "Exit codes:\n  0  every file is valid\n  1  usage or I/O error\n  2  at least one file has errors"
    )]
    Check {
        /// Files, directories, or glob patterns. `-` reads standard input.
        #[arg(value_name = "PATHS")]
        paths: Vec<String>,
        /// Read the program from standard input.
        #[arg(long)]
        stdin: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Human)]
        format: Format,
        /// Source language tag. Only Structured Text is supported.
        #[arg(long, default_value = "st")]
        language: String,
        /// Configuration file (defaults to stguard.toml in the current directory).
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List every diagnostic rule and safety keyword family.
    Rules {
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Human)]
        format: Format,
    },
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Human,
    Json,
}
