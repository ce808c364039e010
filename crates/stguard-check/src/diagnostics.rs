//! Diagnostic types reported by the validator.
//!
//! Every finding carries a stable [`DiagnosticCode`]; the code alone fixes
//! its kind, category, and severity, so call sites only supply the message
//! and position.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a finding invalidates the program, warns, or merely advises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Invalidates the report.
    Error,
    /// Advisory; does not affect validity.
    Warning,
    /// Purely informational.
    Suggestion,
}

/// How urgent a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Must be fixed before the program can be trusted.
    Critical,
    /// Should be fixed.
    Medium,
    /// Nice to fix.
    Low,
}

/// Area of concern a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Malformed or suspicious syntax.
    Syntax,
    /// Control-logic meaning. Nothing emits this yet; it only feeds the logic score.
    Semantics,
    /// Industrial safety practice.
    Safety,
    /// Readability and maintenance.
    Style,
    /// IEC 61131-3 conventions.
    IecCompliance,
}

impl DiagnosticKind {
    /// Lower-case name, as serialized.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Suggestion => "suggestion",
        }
    }
}

impl Severity {
    /// Lower-case name, as serialized.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Category {
    /// Snake-case name, as serialized.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Semantics => "semantics",
            Self::Safety => "safety",
            Self::Style => "style",
            Self::IecCompliance => "iec_compliance",
        }
    }
}

/// A diagnostic code identifying the rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum DiagnosticCode {
    // Errors (E1xx)
    /// Reserved word declared as a variable name.
    ReservedIdentifier,
    /// Parentheses do not balance over the whole program.
    UnmatchedParentheses,
    /// IF/ELSIF line without THEN.
    IfWithoutThen,
    /// FOR line without TO.
    ForWithoutTo,
    /// WHILE line without DO.
    WhileWithoutDo,
    /// CASE line without OF.
    CaseWithoutOf,

    // Warnings (W1xx)
    /// Declared type outside the elementary type set.
    NonStandardType,
    /// Declared name breaks the naming convention.
    NamingConvention,
    /// Bare `=` where `:=` was probably meant.
    ComparisonAsAssignment,
    /// Statement not terminated by `;`.
    MissingSemicolon,
    /// Declared variable never assigned.
    UnusedVariable,
    /// Source longer than the scan budget.
    ScanBudgetExceeded,

    // Suggestions (S1xx)
    /// Program has no comments at all.
    MissingComments,
    /// No emergency-stop handling detected.
    MissingEmergencyStop,
    /// Program is long enough to split up.
    LargeProgram,
}

impl DiagnosticCode {
    /// Every code, in code order.
    pub const ALL: [DiagnosticCode; 15] = [
        Self::ReservedIdentifier,
        Self::UnmatchedParentheses,
        Self::IfWithoutThen,
        Self::ForWithoutTo,
        Self::WhileWithoutDo,
        Self::CaseWithoutOf,
        Self::NonStandardType,
        Self::NamingConvention,
        Self::ComparisonAsAssignment,
        Self::MissingSemicolon,
        Self::UnusedVariable,
        Self::ScanBudgetExceeded,
        Self::MissingComments,
        Self::MissingEmergencyStop,
        Self::LargeProgram,
    ];

    /// Returns the string code (e.g., "E101").
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::ReservedIdentifier => "E101",
            Self::UnmatchedParentheses => "E102",
            Self::IfWithoutThen => "E103",
            Self::ForWithoutTo => "E104",
            Self::WhileWithoutDo => "E105",
            Self::CaseWithoutOf => "E106",
            Self::NonStandardType => "W101",
            Self::NamingConvention => "W102",
            Self::ComparisonAsAssignment => "W103",
            Self::MissingSemicolon => "W104",
            Self::UnusedVariable => "W105",
            Self::ScanBudgetExceeded => "W190",
            Self::MissingComments => "S101",
            Self::MissingEmergencyStop => "S102",
            Self::LargeProgram => "S103",
        }
    }

    /// Returns the kind of finding this code produces.
    #[must_use]
    pub fn kind(self) -> DiagnosticKind {
        match self {
            Self::ReservedIdentifier
            | Self::UnmatchedParentheses
            | Self::IfWithoutThen
            | Self::ForWithoutTo
            | Self::WhileWithoutDo
            | Self::CaseWithoutOf => DiagnosticKind::Error,

            Self::NonStandardType
            | Self::NamingConvention
            | Self::ComparisonAsAssignment
            | Self::MissingSemicolon
            | Self::UnusedVariable
            | Self::ScanBudgetExceeded => DiagnosticKind::Warning,

            Self::MissingComments | Self::MissingEmergencyStop | Self::LargeProgram => {
                DiagnosticKind::Suggestion
            }
        }
    }

    /// Returns the category of this code.
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::ReservedIdentifier
            | Self::UnmatchedParentheses
            | Self::IfWithoutThen
            | Self::ForWithoutTo
            | Self::WhileWithoutDo
            | Self::CaseWithoutOf
            | Self::ComparisonAsAssignment
            | Self::ScanBudgetExceeded => Category::Syntax,
            Self::NonStandardType | Self::NamingConvention => Category::IecCompliance,
            Self::MissingSemicolon
            | Self::UnusedVariable
            | Self::MissingComments
            | Self::LargeProgram => Category::Style,
            Self::MissingEmergencyStop => Category::Safety,
        }
    }

    /// Returns the severity of this code.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self.kind() {
            DiagnosticKind::Error => Severity::Critical,
            DiagnosticKind::Warning => match self {
                Self::UnusedVariable => Severity::Low,
                _ => Severity::Medium,
            },
            DiagnosticKind::Suggestion => match self {
                Self::MissingEmergencyStop => Severity::Medium,
                _ => Severity::Low,
            },
        }
    }

    /// Short description used when listing rules.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::ReservedIdentifier => "reserved word used as identifier",
            Self::UnmatchedParentheses => "unmatched parentheses in code",
            Self::IfWithoutThen => "IF statement must be followed by THEN",
            Self::ForWithoutTo => "FOR statement missing TO keyword",
            Self::WhileWithoutDo => "WHILE statement missing DO keyword",
            Self::CaseWithoutOf => "CASE statement missing OF keyword",
            Self::NonStandardType => "non-standard data type used",
            Self::NamingConvention => "identifier does not follow naming conventions",
            Self::ComparisonAsAssignment => "use := for assignment, = is for comparison",
            Self::MissingSemicolon => "statement should end with semicolon",
            Self::UnusedVariable => "declared but never used",
            Self::ScanBudgetExceeded => "source exceeds the line budget",
            Self::MissingComments => "add documentation comments",
            Self::MissingEmergencyStop => "implement emergency stop logic",
            Self::LargeProgram => "split large programs into function blocks",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<DiagnosticCode> for &'static str {
    fn from(code: DiagnosticCode) -> Self {
        code.code()
    }
}

/// Error returned when a string is not a known diagnostic code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diagnostic code '{0}'")]
pub struct UnknownCode(pub String);

impl FromStr for DiagnosticCode {
    type Err = UnknownCode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.code().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownCode(value.to_string()))
    }
}

impl TryFrom<String> for DiagnosticCode {
    type Error = UnknownCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that produced this finding.
    pub code: DiagnosticCode,
    /// Error, warning, or suggestion.
    pub kind: DiagnosticKind,
    /// Human-readable message.
    pub message: String,
    /// 1-based line, absent for document-level findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// 1-based column, when the finding points at a token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    /// How urgent the finding is.
    pub severity: Severity,
    /// Area of concern.
    pub category: Category,
}

impl Diagnostic {
    /// Creates a document-level diagnostic.
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: code.kind(),
            message: message.into(),
            line: None,
            column: None,
            severity: code.severity(),
            category: code.category(),
        }
    }

    /// Creates a diagnostic on `line`.
    pub fn at_line(code: DiagnosticCode, line: u32, message: impl Into<String>) -> Self {
        Self {
            line: Some(line),
            ..Self::new(code, message)
        }
    }

    /// Attaches a column.
    #[must_use]
    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    /// Returns true if this is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == DiagnosticKind::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.kind.as_str(), self.code, self.message)?;
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, " (at {line}:{column})"),
            (Some(line), None) => write!(f, " (at line {line})"),
            _ => Ok(()),
        }
    }
}
