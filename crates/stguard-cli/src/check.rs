//! `stguard check`: validate files and report.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Serialize;
use stguard_check::{Diagnostic, Language, ValidationReport, Validator};
use tracing::debug;

use crate::cli::Format;
use crate::config::CliConfig;
use crate::style;

const GLOB_CHARS: &[char] = &['*', '?', '['];

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Invalid,
}

#[derive(Debug)]
pub struct CheckOptions {
    pub paths: Vec<String>,
    pub stdin: bool,
    pub format: Format,
    pub language: String,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn label(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> anyhow::Result<String> {
        match self {
            Input::Stdin => {
                let mut source = String::new();
                std::io::stdin()
                    .read_to_string(&mut source)
                    .context("failed to read standard input")?;
                Ok(source)
            }
            Input::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
        }
    }
}

#[derive(Debug, Serialize)]
struct FileReport<'a> {
    path: String,
    report: &'a ValidationReport,
}

pub fn run_check(options: CheckOptions) -> anyhow::Result<Outcome> {
    let language = Language::from_tag(&options.language)?;
    let config = match &options.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::discover(Path::new(".")),
    };
    let validator = Validator::new(config.validator);
    let inputs = expand_inputs(&options.paths, options.stdin)?;
    debug!(language = %language, inputs = inputs.len(), "checking");

    let mut invalid = 0usize;
    for input in &inputs {
        let source = input.read()?;
        let report = validator.validate(&source);
        if !report.is_valid {
            invalid += 1;
        }
        let label = input.label();
        match options.format {
            Format::Human => print!("{}", render_human(&label, &report)),
            Format::Json => {
                let line = serde_json::to_string(&FileReport {
                    path: label,
                    report: &report,
                })?;
                println!("{line}");
            }
        }
    }

    if options.format == Format::Human {
        println!("{}", render_summary(inputs.len(), invalid));
    }
    Ok(if invalid == 0 {
        Outcome::Clean
    } else {
        Outcome::Invalid
    })
}

fn expand_inputs(paths: &[String], stdin: bool) -> anyhow::Result<Vec<Input>> {
    let mut inputs = Vec::new();
    if stdin {
        inputs.push(Input::Stdin);
    }
    for arg in paths {
        if arg == "-" {
            inputs.push(Input::Stdin);
            continue;
        }
        let path = Path::new(arg);
        if path.is_dir() {
            let pattern = path.join("**").join("*.st");
            inputs.extend(expand_glob(&pattern.to_string_lossy())?);
        } else if arg.contains(GLOB_CHARS) {
            inputs.extend(expand_glob(arg)?);
        } else {
            inputs.push(Input::File(path.to_path_buf()));
        }
    }
    if inputs.is_empty() {
        bail!("no input: pass files, directories, globs, or --stdin");
    }
    Ok(inputs)
}

fn expand_glob(pattern: &str) -> anyhow::Result<Vec<Input>> {
    let mut matches = Vec::new();
    for entry in glob::glob(pattern).with_context(|| format!("invalid glob pattern '{pattern}'"))? {
        let path = entry?;
        if path.is_file() {
            matches.push(path);
        }
    }
    if matches.is_empty() {
        bail!("'{pattern}' matched no files");
    }
    matches.sort();
    Ok(matches.into_iter().map(Input::File).collect())
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn render_diagnostic(label: &str, diagnostic: &Diagnostic) -> String {
    let location = match (diagnostic.line, diagnostic.column) {
        (Some(line), Some(column)) => format!("{label}:{line}:{column}"),
        (Some(line), None) => format!("{label}:{line}"),
        _ => label.to_string(),
    };
    let tag = format!("{}[{}]", diagnostic.kind.as_str(), diagnostic.code);
    format!(
        "  {location}: {}: {}\n",
        style::by_kind(diagnostic.kind, tag),
        diagnostic.message
    )
}

fn render_human(label: &str, report: &ValidationReport) -> String {
    let status = if report.is_valid {
        style::success("valid")
    } else {
        style::error("invalid")
    };
    let mut out = format!(
        "{}: {status} ({}, {}, {})\n",
        style::accent(label),
        plural(report.errors.len(), "error"),
        plural(report.warnings.len(), "warning"),
        plural(report.suggestions.len(), "suggestion"),
    );
    for diagnostic in report.diagnostics() {
        out.push_str(&render_diagnostic(label, diagnostic));
    }
    out.push_str(&style::dim(format!(
        "  scores: syntax {}, logic {}, safety {}\n",
        report.syntax_score, report.logic_score, report.safety_score
    )));
    out
}

fn render_summary(files: usize, invalid: usize) -> String {
    let text = format!("checked {}, {invalid} invalid", plural(files, "file"));
    if invalid == 0 {
        style::success(text)
    } else {
        style::error(text)
    }
}
