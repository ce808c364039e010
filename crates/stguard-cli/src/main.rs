//! CLI entrypoint for stguard.

mod check;
mod cli;
mod completions;
mod config;
mod rules;
mod style;

use clap::Parser;

use check::{CheckOptions, Outcome};
use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    match run() {
        Ok(Outcome::Clean) => Ok(()),
        Ok(Outcome::Invalid) => std::process::exit(2),
        Err(err) => {
            eprintln!("{}", style::error(format!("Error: {err:#}")));
            std::process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<Outcome> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // A failed write here has no other channel to be reported on.
            err.print().ok();
            std::process::exit(usage_exit_code(&err));
        }
    };
    init_tracing(cli.verbose);

    match cli.command {
        Command::Check {
            paths,
            stdin,
            format,
            language,
            config,
        } => check::run_check(CheckOptions {
            paths,
            stdin,
            format,
            language,
            config,
        }),
        Command::Rules { format } => rules::run_rules(format).map(|()| Outcome::Clean),
        Command::Completions { shell } => {
            completions::run_completions(shell).map(|()| Outcome::Clean)
        }
    }
}

/// Usage errors exit with 1; exit code 2 is reserved for invalid programs.
/// `--help` and `--version` exit cleanly.
fn usage_exit_code(err: &clap::Error) -> i32 {
    i32::from(err.use_stderr())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
