//! Declarative rule tables.
//!
//! Line rules are plain data: a code, the scope they apply in, and a
//! detector returning the column of the offending token. Adding or
//! removing a check is a table edit.

pub mod document;
pub mod safety;
pub mod structure;

use stguard_syntax::SourceLine;

use crate::diagnostics::{Diagnostic, DiagnosticCode};

/// Where in the program a line rule is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every scanned line.
    Anywhere,
    /// Only lines outside declaration sections.
    OutsideDeclarations,
}

/// A hit reported by a line rule detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// 1-based column, if the rule can point at a token.
    pub column: Option<u32>,
}

impl Hit {
    /// A hit at `column`.
    #[must_use]
    pub fn at(column: u32) -> Self {
        Self {
            column: Some(column),
        }
    }
}

/// A per-line structural or style check.
#[derive(Debug, Clone, Copy)]
pub struct LineRule {
    /// Code of the diagnostic this rule emits.
    pub code: DiagnosticCode,
    /// Message of the diagnostic.
    pub message: &'static str,
    /// Where the rule runs.
    pub scope: Scope,
    /// Returns a hit if the line violates the rule.
    pub detect: fn(&SourceLine<'_>) -> Option<Hit>,
}

impl LineRule {
    /// Runs the rule on `line`, honoring its scope.
    #[must_use]
    pub fn apply(&self, line: &SourceLine<'_>, in_declarations: bool) -> Option<Diagnostic> {
        if self.scope == Scope::OutsideDeclarations && in_declarations {
            return None;
        }
        let hit = (self.detect)(line)?;
        let diagnostic = Diagnostic::at_line(self.code, line.number(), self.message);
        Some(match hit.column {
            Some(column) => diagnostic.with_column(column),
            None => diagnostic,
        })
    }
}
