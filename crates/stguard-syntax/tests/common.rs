//! Shared helpers for line lexing tests.
#![allow(dead_code, unused_imports)]

pub use stguard_syntax::{source_lines, SourceLine, TokenKind};

/// Formats the significant tokens of one line, one per row.
pub fn dump_line(raw: &str) -> String {
    let line = SourceLine::new(1, raw);
    let mut out = String::new();
    for token in line.significant() {
        out.push_str(&format!(
            "{:?}@{} {:?}\n",
            token.kind,
            line.column(token),
            line.text(token)
        ));
    }
    out
}
