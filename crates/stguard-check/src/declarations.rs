//! Declaration table: parses `name : TYPE` lines inside declaration
//! sections and cross-checks them against assignment targets.

use smol_str::SmolStr;
use stguard_syntax::{
    follows_naming_convention, is_reserved_word, is_standard_type, SourceLine, Token,
    TokenKind,
};
use text_size::TextSize;
use tracing::trace;

use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::state::{DeclaredVariable, ScanState};

/// A declared name and the column it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaredName<'src> {
    /// Name as written.
    pub text: &'src str,
    /// 1-based column.
    pub column: u32,
}

/// One parsed `a, b AT %IX0.0 : TYPE ...` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'src> {
    /// Declared names, left to right.
    pub names: Vec<DeclaredName<'src>>,
    /// First word after the colon.
    pub type_name: &'src str,
    /// 1-based column of the type word.
    pub type_column: u32,
}

/// Parses a declaration line. Anything after the type word is ignored.
#[must_use]
pub fn parse_declaration<'src>(line: &SourceLine<'src>) -> Option<Declaration<'src>> {
    let raw = line.raw();
    let colon = line.significant().find(|token| {
        matches!(token.kind, TokenKind::Colon | TokenKind::Assign)
    })?;
    if colon.kind != TokenKind::Colon {
        return None;
    }

    let head_end = usize::from(colon.range.start());
    let mut names = Vec::new();
    let mut offset = 0usize;
    for piece in raw[..head_end].split(',') {
        let lead = piece.len() - piece.trim_start().len();
        let mut words = piece.split_whitespace();
        let name = words.next()?;
        // Only a located-variable clause may follow the name.
        if let Some(next) = words.next() {
            if !next.eq_ignore_ascii_case("AT") {
                return None;
            }
        }
        names.push(DeclaredName {
            text: name,
            column: line.column_at(to_size(offset + lead)),
        });
        offset += piece.len() + 1;
    }

    let tail_start = usize::from(colon.range.end());
    let tail = &raw[tail_start..];
    let type_lead = tail.len() - tail.trim_start().len();
    let type_text = &tail[type_lead..];
    let type_len = type_text
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(type_text.len());
    if type_len == 0 {
        return None;
    }

    Some(Declaration {
        names,
        type_name: &type_text[..type_len],
        type_column: line.column_at(to_size(tail_start + type_lead)),
    })
}

fn to_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}

/// Records the declarations on a line inside a declaration section.
pub(crate) fn check_declaration(
    state: &mut ScanState,
    line: &SourceLine<'_>,
    found: &mut Vec<Diagnostic>,
) {
    let Some(declaration) = parse_declaration(line) else {
        return;
    };
    let number = line.number();

    if is_standard_type(declaration.type_name) {
        state.compliance.standard_data_type_used = true;
    } else {
        found.push(
            Diagnostic::at_line(
                DiagnosticCode::NonStandardType,
                number,
                format!("Non-standard data type used: {}", declaration.type_name),
            )
            .with_column(declaration.type_column),
        );
    }

    for name in &declaration.names {
        let upper = SmolStr::new(name.text.to_ascii_uppercase());
        trace!(line = number, name = name.text, "declared variable");
        state
            .declared
            .entry(upper)
            .or_insert_with(|| DeclaredVariable {
                name: SmolStr::new(name.text),
                line: number,
            });

        if !follows_naming_convention(name.text) {
            state.compliance.naming_convention_followed = false;
            found.push(
                Diagnostic::at_line(
                    DiagnosticCode::NamingConvention,
                    number,
                    format!(
                        "Variable name '{}' does not follow IEC naming conventions",
                        name.text
                    ),
                )
                .with_column(name.column),
            );
        }

        if is_reserved_word(name.text) {
            found.push(
                Diagnostic::at_line(
                    DiagnosticCode::ReservedIdentifier,
                    number,
                    format!(
                        "'{}' is a reserved word and cannot be used as an identifier",
                        name.text
                    ),
                )
                .with_column(name.column),
            );
        }
    }
}

/// Records every `<identifier> :=` target on a line outside declarations.
pub(crate) fn record_assignment_targets(state: &mut ScanState, line: &SourceLine<'_>) {
    let mut previous: Option<&Token> = None;
    for token in line.significant() {
        if token.kind == TokenKind::Assign {
            if let Some(target) = previous {
                if target.kind.is_word() {
                    let name = line.text(target).to_ascii_uppercase();
                    state.used.insert(SmolStr::new(name));
                }
            }
        }
        previous = Some(token);
    }
}

/// Warns about every declared variable that was never assigned.
pub(crate) fn finish_unused(state: &ScanState) -> Vec<Diagnostic> {
    state
        .declared
        .iter()
        .filter(|(upper, _)| !state.used.contains(upper.as_str()))
        .map(|(_, variable)| {
            Diagnostic::new(
                DiagnosticCode::UnusedVariable,
                format!("Variable '{}' is declared but never used", variable.name),
            )
        })
        .collect()
}
