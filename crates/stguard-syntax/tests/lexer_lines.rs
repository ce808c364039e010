mod common;
use common::*;

use expect_test::expect;

#[test]
fn if_header_tokens() {
    expect![[r#"
        KwIf@1 "IF"
        Ident@4 "level"
        GtEq@10 ">="
        RealLiteral@13 "10.5"
        KwThen@18 "THEN"
    "#]]
    .assert_eq(&dump_line("IF level >= 10.5 THEN"));
}

#[test]
fn declaration_with_initializer() {
    expect![[r#"
        Ident@5 "speed"
        Colon@11 ":"
        Ident@13 "REAL"
        Assign@18 ":="
        RealLiteral@21 "0.0"
        Semicolon@24 ";"
    "#]]
    .assert_eq(&dump_line("    speed : REAL := 0.0;"));
}

#[test]
fn function_block_call_with_named_arguments() {
    expect![[r#"
        Ident@1 "timer"
        LParen@6 "("
        Ident@7 "IN"
        Assign@10 ":="
        Ident@13 "start"
        Comma@18 ","
        Ident@20 "PT"
        Assign@23 ":="
        TypedLiteral@26 "T#5s"
        Comma@30 ","
        Ident@32 "Q"
        Arrow@34 "=>"
        Ident@37 "done"
        RParen@41 ")"
        Semicolon@42 ";"
    "#]]
    .assert_eq(&dump_line("timer(IN := start, PT := T#5s, Q => done);"));
}

#[test]
fn strings_and_inline_comments_are_single_tokens() {
    expect![[r#"
        Ident@1 "msg"
        Assign@5 ":="
        StringLiteral@8 "'(a = b'"
        Semicolon@16 ";"
    "#]]
    .assert_eq(&dump_line("msg := '(a = b'; (* ) *)"));
}

#[test]
fn section_keywords_open_lines() {
    let kinds: Vec<_> = source_lines("VAR_INPUT\n  x : BOOL;\nEND_VAR\nVAR CONSTANT")
        .map(|line| line.first_kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(TokenKind::KwVarInput),
            Some(TokenKind::Ident),
            Some(TokenKind::KwEndVar),
            Some(TokenKind::KwVar),
        ]
    );
}

#[test]
fn garbage_never_panics() {
    for raw in ["\u{0}\u{7f}", "'''", "(*(*(*", "%%%", "ÿ := ∞;", "#####"] {
        let line = SourceLine::new(1, raw);
        let _ = line.significant().count();
        let _ = line.last_visible();
    }
}
