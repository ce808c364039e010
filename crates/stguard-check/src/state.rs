//! Scan state and the declaration-section tracker.
//!
//! The state is threaded through the scan by value: each line step takes
//! the previous state and returns the next one.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use stguard_syntax::tables::{is_declaration_section_keyword, DECLARATION_SECTION_END};
use stguard_syntax::SourceLine;

use crate::audit::{ComplianceAudit, SafetyAudit};

/// Where the scan currently is with respect to declaration sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Between declaration sections.
    #[default]
    Outside,
    /// Inside `VAR` .. `END_VAR` or one of its variants.
    Declarations,
}

/// A variable recorded by the declaration table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredVariable {
    /// Name as written.
    pub name: SmolStr,
    /// Line of the declaration.
    pub line: u32,
}

/// Everything one validation call accumulates while walking the lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub(crate) section: Section,
    pub(crate) saw_program_or_block: bool,
    pub(crate) paren_balance: i64,
    /// Keyed by upper-cased name, in declaration order.
    pub(crate) declared: IndexMap<SmolStr, DeclaredVariable>,
    /// Upper-cased assignment targets.
    pub(crate) used: FxHashSet<SmolStr>,
    pub(crate) safety: SafetyAudit,
    pub(crate) compliance: ComplianceAudit,
}

/// What the section tracker made of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEvent {
    /// The line opened a declaration section.
    Opened,
    /// The line closed a declaration section.
    Closed,
    /// The line is ordinary content of the current section.
    Content,
}

impl ScanState {
    /// Fresh state for a new validation call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current section.
    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    /// Returns true while inside a declaration section.
    #[must_use]
    pub fn in_declaration_section(&self) -> bool {
        self.section == Section::Declarations
    }

    /// Whether a PROGRAM, FUNCTION, or FUNCTION_BLOCK opener was seen.
    #[must_use]
    pub fn saw_program_or_block(&self) -> bool {
        self.saw_program_or_block
    }

    /// Running `(` minus `)` count.
    #[must_use]
    pub fn paren_balance(&self) -> i64 {
        self.paren_balance
    }

    /// Declared variables in declaration order.
    pub fn declared(&self) -> impl Iterator<Item = &DeclaredVariable> {
        self.declared.values()
    }

    /// Returns true if `name` (any case) was used as an assignment target.
    #[must_use]
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name.to_ascii_uppercase().as_str())
    }

    /// Safety evidence so far.
    #[must_use]
    pub fn safety(&self) -> &SafetyAudit {
        &self.safety
    }

    /// Compliance evidence so far.
    #[must_use]
    pub fn compliance(&self) -> &ComplianceAudit {
        &self.compliance
    }

    /// Advances the section state machine over a non-skipped line.
    pub(crate) fn track_section(&mut self, line: &SourceLine<'_>) -> SectionEvent {
        let Some(first) = line.significant().next() else {
            return SectionEvent::Content;
        };
        if first.kind.is_pou_opener() {
            self.saw_program_or_block = true;
        }

        if is_declaration_section_keyword(line.text(first)) {
            self.section = Section::Declarations;
            self.compliance.variable_declaration_present = true;
            return SectionEvent::Opened;
        }

        if line.upper() == DECLARATION_SECTION_END {
            self.section = Section::Outside;
            return SectionEvent::Closed;
        }

        SectionEvent::Content
    }
}
