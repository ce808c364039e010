//! Structural balance checks.
//!
//! Keyword pairs are checked line by line with no block stack: a
//! multi-line IF condition is reported even if THEN follows later.
//! Declaration sections hold no statements, so keyword pairs are not
//! checked there.

use stguard_syntax::{SourceLine, TokenKind};

use super::{Hit, LineRule, Scope};
use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::state::ScanState;

/// Structural line rules, in evaluation order.
pub const STRUCTURE_RULES: &[LineRule] = &[
    LineRule {
        code: DiagnosticCode::IfWithoutThen,
        message: "IF statement must be followed by THEN",
        scope: Scope::OutsideDeclarations,
        detect: if_without_then,
    },
    LineRule {
        code: DiagnosticCode::ForWithoutTo,
        message: "FOR statement missing TO keyword",
        scope: Scope::OutsideDeclarations,
        detect: for_without_to,
    },
    LineRule {
        code: DiagnosticCode::WhileWithoutDo,
        message: "WHILE statement missing DO keyword",
        scope: Scope::OutsideDeclarations,
        detect: while_without_do,
    },
    LineRule {
        code: DiagnosticCode::CaseWithoutOf,
        message: "CASE statement missing OF keyword",
        scope: Scope::OutsideDeclarations,
        detect: case_without_of,
    },
    LineRule {
        code: DiagnosticCode::ComparisonAsAssignment,
        message: "Use := for assignment, = is for comparison",
        scope: Scope::Anywhere,
        detect: comparison_as_assignment,
    },
    LineRule {
        code: DiagnosticCode::MissingSemicolon,
        message: "Statement should end with semicolon",
        scope: Scope::OutsideDeclarations,
        detect: missing_semicolon,
    },
];

fn opener_without(
    line: &SourceLine<'_>,
    opener: TokenKind,
    partner: TokenKind,
) -> Option<Hit> {
    if line.contains(partner) {
        return None;
    }
    line.find(opener).map(|token| Hit::at(line.column(token)))
}

fn if_opener<'a>(line: &'a SourceLine<'_>) -> Option<&'a stguard_syntax::Token> {
    line.find(TokenKind::KwIf)
        .or_else(|| line.find(TokenKind::KwElsif))
}

fn if_without_then(line: &SourceLine<'_>) -> Option<Hit> {
    if line.contains(TokenKind::KwThen) || line.contains(TokenKind::Assign) {
        return None;
    }
    if_opener(line).map(|token| Hit::at(line.column(token)))
}

fn for_without_to(line: &SourceLine<'_>) -> Option<Hit> {
    opener_without(line, TokenKind::KwFor, TokenKind::KwTo)
}

fn while_without_do(line: &SourceLine<'_>) -> Option<Hit> {
    opener_without(line, TokenKind::KwWhile, TokenKind::KwDo)
}

fn case_without_of(line: &SourceLine<'_>) -> Option<Hit> {
    opener_without(line, TokenKind::KwCase, TokenKind::KwOf)
}

fn comparison_as_assignment(line: &SourceLine<'_>) -> Option<Hit> {
    if if_opener(line).is_some() {
        return None;
    }
    line.find(TokenKind::Eq).map(|token| Hit::at(line.column(token)))
}

fn missing_semicolon(line: &SourceLine<'_>) -> Option<Hit> {
    let is_statement = line.contains(TokenKind::Assign)
        || line.first_kind() == Some(TokenKind::KwReturn)
        || line.contains(TokenKind::KwExit);
    if !is_statement {
        return None;
    }
    // The line itself has to end in `;`, so a trailing comment counts as the end.
    let last = line.last_visible()?;
    if last.kind == TokenKind::Semicolon {
        return None;
    }
    Some(Hit::at(line.column_at(last.range.end())))
}

/// Updates the parenthesis balance and block-structure evidence for a line.
pub(crate) fn track_balance(state: &mut ScanState, line: &SourceLine<'_>) {
    let opened = i64::try_from(line.count(TokenKind::LParen)).unwrap_or(i64::MAX);
    let closed = i64::try_from(line.count(TokenKind::RParen)).unwrap_or(i64::MAX);
    state.paren_balance = state.paren_balance.saturating_add(opened).saturating_sub(closed);

    if line.significant().any(|token| token.kind.is_block_terminator()) {
        state.compliance.block_structure_compliant = true;
    }
}

/// Reports a document-level error if parentheses never balanced out.
pub(crate) fn finish_balance(state: &ScanState) -> Option<Diagnostic> {
    (state.paren_balance != 0).then(|| {
        Diagnostic::new(
            DiagnosticCode::UnmatchedParentheses,
            "Unmatched parentheses in code",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &str, in_declarations: bool) -> Vec<DiagnosticCode> {
        let line = SourceLine::new(1, raw);
        STRUCTURE_RULES
            .iter()
            .filter_map(|rule| rule.apply(&line, in_declarations))
            .map(|diag| diag.code)
            .collect()
    }

    #[test]
    fn test_well_formed_headers_pass() {
        assert!(codes("IF a > b THEN", false).is_empty());
        assert!(codes("ELSIF a < b THEN", false).is_empty());
        assert!(codes("WHILE running DO", false).is_empty());
        assert!(codes("CASE state OF", false).is_empty());
        assert!(codes("END_IF;", false).is_empty());
        assert!(codes("x := a <= b;", false).is_empty());
    }

    #[test]
    fn test_missing_partner_keywords() {
        assert_eq!(codes("IF a > b", false), vec![DiagnosticCode::IfWithoutThen]);
        assert_eq!(codes("ELSIF a", false), vec![DiagnosticCode::IfWithoutThen]);
        assert_eq!(
            codes("FOR i := 1 DO", false),
            vec![DiagnosticCode::ForWithoutTo, DiagnosticCode::MissingSemicolon]
        );
        assert_eq!(codes("WHILE running", false), vec![DiagnosticCode::WhileWithoutDo]);
        assert_eq!(codes("CASE state", false), vec![DiagnosticCode::CaseWithoutOf]);
    }

    #[test]
    fn test_keyword_pairs_skip_declarations() {
        assert!(codes("IF : BOOL;", true).is_empty());
        assert!(codes("CASE : INT;", true).is_empty());
    }

    #[test]
    fn test_if_with_assignment_is_not_flagged() {
        assert!(!codes("IF x := 1;", false).contains(&DiagnosticCode::IfWithoutThen));
    }

    #[test]
    fn test_keyword_like_identifiers_do_not_trigger() {
        assert!(codes("modif := before + total;", false).is_empty());
        assert!(codes("END_IF (* done *)", false).is_empty());
    }

    #[test]
    fn test_bare_equals() {
        let line = SourceLine::new(7, "  a = TRUE;");
        let diag = STRUCTURE_RULES
            .iter()
            .find_map(|rule| rule.apply(&line, false))
            .expect("diagnostic");
        assert_eq!(diag.code, DiagnosticCode::ComparisonAsAssignment);
        assert_eq!(diag.line, Some(7));
        assert_eq!(diag.column, Some(5));
        assert!(codes("IF a = b THEN", false).is_empty());
        assert!(codes("fb(Q => out);", false).is_empty());
    }

    #[test]
    fn test_missing_semicolon() {
        assert_eq!(codes("x := 1", false), vec![DiagnosticCode::MissingSemicolon]);
        assert_eq!(codes("RETURN", false), vec![DiagnosticCode::MissingSemicolon]);
        assert_eq!(codes("IF stop THEN EXIT", false), vec![DiagnosticCode::MissingSemicolon]);
        assert!(codes("RETURN;", false).is_empty());
        assert!(codes("x := 1; (* set *) ;", false).is_empty());
        assert!(codes("speed : REAL := 1.0", true).is_empty());
    }

    #[test]
    fn test_missing_semicolon_reads_the_line_end() {
        // Assignments in loop headers count as statements too.
        assert_eq!(
            codes("FOR i := 1 TO 10 DO", false),
            vec![DiagnosticCode::MissingSemicolon]
        );
        assert_eq!(
            codes("FOR i := 1 TO 10 BY 2 DO", false),
            vec![DiagnosticCode::MissingSemicolon]
        );

        let line = SourceLine::new(3, "  x := 1; // set");
        let diag = STRUCTURE_RULES
            .iter()
            .find_map(|rule| rule.apply(&line, false))
            .expect("diagnostic");
        assert_eq!(diag.code, DiagnosticCode::MissingSemicolon);
        assert_eq!(diag.column, Some(17));
    }

    #[test]
    fn test_paren_balance_ignores_strings_and_comments() {
        let mut state = ScanState::new();
        track_balance(&mut state, &SourceLine::new(1, "x := (a + b;"));
        assert_eq!(state.paren_balance(), 1);
        track_balance(&mut state, &SourceLine::new(2, "msg := ')'; (* ) *)"));
        assert_eq!(state.paren_balance(), 1);
        track_balance(&mut state, &SourceLine::new(3, ");"));
        assert_eq!(state.paren_balance(), 0);
        assert!(finish_balance(&state).is_none());
    }

    #[test]
    fn test_block_terminators_mark_compliance() {
        let mut state = ScanState::new();
        track_balance(&mut state, &SourceLine::new(1, "x := 1;"));
        assert!(!state.compliance().block_structure_compliant);
        track_balance(&mut state, &SourceLine::new(2, "END_CASE;"));
        assert!(state.compliance().block_structure_compliant);
    }
}
