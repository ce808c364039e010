//! Shared helpers for validator tests.
#![allow(dead_code, unused_imports)]

pub use stguard_check::{
    step, validate, Category, Diagnostic, DiagnosticCode, DiagnosticKind, ScanState, Severity,
    ValidationReport, Validator, ValidatorConfig,
};
pub use stguard_syntax::source_lines;

/// Codes of a diagnostic list, in order.
pub fn codes(diagnostics: &[Diagnostic]) -> Vec<DiagnosticCode> {
    diagnostics.iter().map(|diag| diag.code).collect()
}

/// One rendered diagnostic per line: errors, warnings, then suggestions.
pub fn render(report: &ValidationReport) -> String {
    let mut out = String::new();
    for diagnostic in report.diagnostics() {
        out.push_str(&diagnostic.to_string());
        out.push('\n');
    }
    out
}

/// Asserts the report-level invariants every report must satisfy.
pub fn assert_well_formed(report: &ValidationReport) {
    assert_eq!(report.is_valid, report.errors.is_empty());
    assert!(report.errors.iter().all(|d| d.kind == DiagnosticKind::Error));
    assert!(report.warnings.iter().all(|d| d.kind == DiagnosticKind::Warning));
    assert!(report
        .suggestions
        .iter()
        .all(|d| d.kind == DiagnosticKind::Suggestion));
    assert!(report.syntax_score <= 100);
    assert!(report.logic_score <= 100);
    assert!(report.safety_score <= 100);
}

/// A realistic, mostly clean program.
pub const CONVEYOR: &str = r#"PROGRAM Conveyor
(* Conveyor control with emergency stop *)
VAR_INPUT
    start_button : BOOL;
    emergency_stop : BOOL;
END_VAR
VAR
    motor_on : BOOL;
    run_timer : TON;
    count : INT;
END_VAR

IF emergency_stop THEN
    motor_on := FALSE;
ELSIF start_button THEN
    motor_on := TRUE;
END_IF;

FOR count := 0 TO 10 DO
    count := count + 1;
END_FOR;
END_PROGRAM
"#;
