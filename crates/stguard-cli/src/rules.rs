//! `stguard rules`: list the rule tables.

use serde::Serialize;
use stguard_check::rules::safety::SAFETY_RULES;
use stguard_check::{Category, DiagnosticCode, DiagnosticKind, Severity};

use crate::cli::Format;
use crate::style;

#[derive(Debug, Serialize)]
struct RuleEntry {
    code: DiagnosticCode,
    kind: DiagnosticKind,
    category: Category,
    severity: Severity,
    title: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SafetyFamilyEntry {
    feature: &'static str,
    patterns: &'static [&'static str],
    message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleListing {
    rules: Vec<RuleEntry>,
    safety_families: Vec<SafetyFamilyEntry>,
}

fn listing() -> RuleListing {
    RuleListing {
        rules: DiagnosticCode::ALL
            .into_iter()
            .map(|code| RuleEntry {
                code,
                kind: code.kind(),
                category: code.category(),
                severity: code.severity(),
                title: code.title(),
            })
            .collect(),
        safety_families: SAFETY_RULES
            .iter()
            .map(|rule| SafetyFamilyEntry {
                feature: rule.feature.field_name(),
                patterns: rule.patterns,
                message: rule.message,
            })
            .collect(),
    }
}

fn render_human(listing: &RuleListing) -> String {
    let mut out = String::new();
    for rule in &listing.rules {
        let line = format!(
            "{}  {:<10}  {:<14}  {:<8}  {}",
            style::by_kind(rule.kind, rule.code.code()),
            rule.kind.as_str(),
            rule.category.as_str(),
            rule.severity.as_str(),
            rule.title
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str("\nSafety keyword families:\n");
    for family in &listing.safety_families {
        out.push_str(&format!(
            "  {:<20}  {}\n",
            family.feature,
            family.patterns.join(", ")
        ));
    }
    out
}

pub fn run_rules(format: Format) -> anyhow::Result<()> {
    let listing = listing();
    match format {
        Format::Human => print!("{}", render_human(&listing)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
    }
    Ok(())
}
