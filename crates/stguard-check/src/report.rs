//! The validation report and the builder that assembles it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::audit::{ComplianceAudit, SafetyAudit};
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticKind};
use crate::score::Scores;

/// The outcome of validating one Structured Text source.
///
/// `is_valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// No errors were found.
    pub is_valid: bool,
    /// Findings that invalidate the program.
    pub errors: Vec<Diagnostic>,
    /// Advisory findings.
    pub warnings: Vec<Diagnostic>,
    /// Informational findings.
    pub suggestions: Vec<Diagnostic>,
    /// Safety feature evidence.
    pub safety: SafetyAudit,
    /// IEC compliance evidence.
    pub compliance: ComplianceAudit,
    /// 0..=100, penalized by errors and warnings.
    pub syntax_score: u8,
    /// 0..=100, penalized by Semantics errors.
    pub logic_score: u8,
    /// 0..=100, 20 per safety feature seen.
    pub safety_score: u8,
}

impl ValidationReport {
    /// All findings: errors, then warnings, then suggestions.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .chain(&self.suggestions)
    }
}

/// Collects diagnostics in append order and finishes them into a report.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    disabled: FxHashSet<DiagnosticCode>,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    suggestions: Vec<Diagnostic>,
}

impl ReportBuilder {
    /// Creates a builder that drops diagnostics with a code in `disabled`.
    #[must_use]
    pub fn new(disabled: FxHashSet<DiagnosticCode>) -> Self {
        Self {
            disabled,
            ..Self::default()
        }
    }

    /// Adds a diagnostic to the list matching its kind.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        if self.disabled.contains(&diagnostic.code) {
            return;
        }
        match diagnostic.kind {
            DiagnosticKind::Error => self.errors.push(diagnostic),
            DiagnosticKind::Warning => self.warnings.push(diagnostic),
            DiagnosticKind::Suggestion => self.suggestions.push(diagnostic),
        }
    }

    /// Adds every diagnostic in order.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.add(diagnostic);
        }
    }

    /// Returns true if any errors have been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Scores the findings and returns the report.
    #[must_use]
    pub fn finish(self, safety: SafetyAudit, compliance: ComplianceAudit) -> ValidationReport {
        let scores = Scores::compute(&self.errors, &self.warnings, &safety);
        ValidationReport {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
            suggestions: self.suggestions,
            safety,
            compliance,
            syntax_score: scores.syntax,
            logic_score: scores.logic,
            safety_score: scores.safety,
        }
    }
}
