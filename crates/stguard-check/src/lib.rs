//! `stguard-check` - Static validation of IEC 61131-3 Structured Text.
//!
//! The validator scans a program line by line and produces a
//! [`ValidationReport`]:
//!
//! - **Section tracking**: `VAR`..`END_VAR` boundaries and POU openers
//! - **Declaration table**: declared names, their types, and whether they are assigned
//! - **Structural balance**: parentheses and IF/FOR/WHILE/CASE keyword pairs
//! - **Rule engine**: safety keyword families and whole-program suggestions
//! - **Scores**: syntax, logic, and safety scores from the findings
//!
//! Input is usually machine generated and often broken, so validation never
//! fails; every anomaly is a diagnostic.
//!
//! # Example
//!
//! ```
//! use stguard_check::validate;
//!
//! let report = validate("VAR\n  IF : BOOL;\nEND_VAR");
//! assert!(!report.is_valid);
//! assert_eq!(report.errors[0].code.code(), "E101");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod audit;
pub mod config;
pub mod declarations;
pub mod diagnostics;
pub mod language;
pub mod report;
pub mod rules;
pub mod score;
pub mod state;
mod validator;

pub use audit::{ComplianceAudit, SafetyAudit, SafetyFeature};
pub use config::ValidatorConfig;
pub use diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticKind, Severity};
pub use language::{Language, LanguageError};
pub use report::ValidationReport;
pub use score::Scores;
pub use state::ScanState;
pub use validator::{step, validate, Validator};
