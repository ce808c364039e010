//! The line scan and its finalization.

use stguard_syntax::{source_lines, SourceLine};
use tracing::{debug, trace, warn};

use crate::config::ValidatorConfig;
use crate::declarations::{check_declaration, finish_unused, record_assignment_targets};
use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::report::{ReportBuilder, ValidationReport};
use crate::rules::document::{suggest, DocumentFacts};
use crate::rules::safety::audit_line;
use crate::rules::structure::{finish_balance, track_balance, STRUCTURE_RULES};
use crate::state::{ScanState, SectionEvent};

/// Validates Structured Text with the default configuration.
#[must_use]
pub fn validate(source: &str) -> ValidationReport {
    Validator::default().validate(source)
}

/// Advances the scan over one line.
///
/// Returns the next state and the diagnostics the line produced, in the
/// order the checks ran.
#[must_use]
pub fn step(mut state: ScanState, line: &SourceLine<'_>) -> (ScanState, Vec<Diagnostic>) {
    let mut found = Vec::new();
    if line.is_skipped() {
        return (state, found);
    }

    let event = state.track_section(line);
    let in_declarations = state.in_declaration_section();
    if event == SectionEvent::Content {
        if in_declarations {
            check_declaration(&mut state, line, &mut found);
        } else {
            record_assignment_targets(&mut state, line);
        }
    }

    track_balance(&mut state, line);
    found.extend(
        STRUCTURE_RULES
            .iter()
            .filter_map(|rule| rule.apply(line, in_declarations)),
    );

    audit_line(&mut state.safety, line);

    for diagnostic in &found {
        trace!(line = line.number(), code = %diagnostic.code, "rule matched");
    }
    (state, found)
}

/// A configured Structured Text validator.
///
/// Validation never fails: malformed input shows up as diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with `config`.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `source` and returns its report.
    #[must_use]
    pub fn validate(&self, source: &str) -> ValidationReport {
        let mut report = ReportBuilder::new(self.config.disabled_codes());
        let mut lines = source_lines(source);

        let state = lines
            .by_ref()
            .take(self.config.max_lines)
            .fold(ScanState::new(), |state, line| {
                let (state, found) = step(state, &line);
                report.extend(found);
                state
            });

        if lines.next().is_some() {
            warn!(max_lines = self.config.max_lines, "source truncated");
            report.add(Diagnostic::new(
                DiagnosticCode::ScanBudgetExceeded,
                format!(
                    "Source exceeds {} lines; remaining lines were not analyzed",
                    self.config.max_lines
                ),
            ));
        }

        report.extend(finish_balance(&state));
        report.extend(finish_unused(&state));

        let facts = DocumentFacts {
            source,
            line_count: source.lines().count(),
            safety: state.safety(),
            large_program_lines: self.config.large_program_lines,
        };
        report.extend(suggest(&facts));

        let report = report.finish(*state.safety(), *state.compliance());
        debug!(
            lines = facts.line_count,
            declared = state.declared().count(),
            saw_program_or_block = state.saw_program_or_block(),
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            suggestions = report.suggestions.len(),
            "validated structured text"
        );
        report
    }
}
