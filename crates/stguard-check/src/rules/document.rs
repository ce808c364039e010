//! Whole-program suggestions, evaluated once after the scan.

use crate::audit::SafetyAudit;
use crate::diagnostics::{Diagnostic, DiagnosticCode};

/// Facts about the whole source the document rules look at.
#[derive(Debug, Clone, Copy)]
pub struct DocumentFacts<'a> {
    /// The complete source text.
    pub source: &'a str,
    /// Number of lines in the source.
    pub line_count: usize,
    /// Safety evidence from the scan.
    pub safety: &'a SafetyAudit,
    /// Threshold for the decomposition suggestion.
    pub large_program_lines: usize,
}

/// A suggestion evaluated over [`DocumentFacts`].
#[derive(Debug, Clone, Copy)]
pub struct DocumentRule {
    /// Code of the suggestion.
    pub code: DiagnosticCode,
    /// Returns the message if the suggestion applies.
    pub detect: fn(&DocumentFacts<'_>) -> Option<String>,
}

/// Document-level suggestions, in report order.
pub const DOCUMENT_RULES: &[DocumentRule] = &[
    DocumentRule {
        code: DiagnosticCode::MissingComments,
        detect: missing_comments,
    },
    DocumentRule {
        code: DiagnosticCode::MissingEmergencyStop,
        detect: missing_emergency_stop,
    },
    DocumentRule {
        code: DiagnosticCode::LargeProgram,
        detect: large_program,
    },
];

fn missing_comments(facts: &DocumentFacts<'_>) -> Option<String> {
    let commented = facts.source.contains("(*") || facts.source.contains("//");
    (!commented).then(|| "Add comments to document the program logic".to_string())
}

fn missing_emergency_stop(facts: &DocumentFacts<'_>) -> Option<String> {
    (!facts.safety.emergency_stop)
        .then(|| "Consider implementing emergency stop logic".to_string())
}

fn large_program(facts: &DocumentFacts<'_>) -> Option<String> {
    (facts.line_count > facts.large_program_lines).then(|| {
        format!(
            "Program has {} lines; consider splitting it into smaller function blocks",
            facts.line_count
        )
    })
}

/// Runs every document rule.
pub(crate) fn suggest(facts: &DocumentFacts<'_>) -> Vec<Diagnostic> {
    DOCUMENT_RULES
        .iter()
        .filter_map(|rule| (rule.detect)(facts).map(|message| Diagnostic::new(rule.code, message)))
        .collect()
}
