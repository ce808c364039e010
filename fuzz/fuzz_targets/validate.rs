#![no_main]

use libfuzzer_sys::fuzz_target;
use stguard_check::{validate, DiagnosticKind};

const MAX_SOURCE_BYTES: usize = 8192;

fuzz_target!(|data: &[u8]| {
    let capped = &data[..data.len().min(MAX_SOURCE_BYTES)];
    let source = String::from_utf8_lossy(capped);

    let report = validate(&source);
    assert_eq!(report.is_valid, report.errors.is_empty());
    assert!(report.errors.iter().all(|d| d.kind == DiagnosticKind::Error));
    assert!(report.warnings.iter().all(|d| d.kind == DiagnosticKind::Warning));
    assert!(report.syntax_score <= 100 && report.logic_score <= 100 && report.safety_score <= 100);
    assert_eq!(report, validate(&source), "validation must be deterministic");
});
