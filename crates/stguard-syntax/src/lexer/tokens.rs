//! Token definitions for single lines of IEC 61131-3 Structured Text.
//!
//! Only the keywords the line checks care about get their own kind; every
//! other word lexes as [`TokenKind::Ident`].

use logos::Logos;

fn lex_block_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    // Unterminated on this line: the token runs to the end.
    let (end, _) = super::close_block_comment(lex.remainder(), 1);
    lex.bump(end);
    true
}

/// Token kinds recognized on a Structured Text line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace.
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    /// `// ...` to end of line.
    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    /// `(* ... *)`, nested.
    #[token("(*", lex_block_comment)]
    BlockComment,

    /// `{ ... }` vendor pragma.
    #[regex(r"\{[^}]*\}")]
    Pragma,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `;`
    #[token(";")]
    Semicolon,

    /// `:`
    #[token(":")]
    Colon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `..`
    #[token("..")]
    DotDot,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    /// `^`
    #[token("^")]
    Caret,

    // =========================================================================
    // OPERATORS
    // =========================================================================
    /// `:=`
    #[token(":=")]
    Assign,

    /// `=>` (output binding)
    #[token("=>")]
    Arrow,

    /// `=`
    #[token("=")]
    Eq,

    /// `<>`
    #[token("<>")]
    Neq,

    /// `<`
    #[token("<")]
    Lt,

    /// `<=`
    #[token("<=")]
    LtEq,

    /// `>`
    #[token(">")]
    Gt,

    /// `>=`
    #[token(">=")]
    GtEq,

    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    /// `**`
    #[token("**")]
    Power,

    /// `&`
    #[token("&")]
    Ampersand,

    // =========================================================================
    // KEYWORDS - Program organization units
    // =========================================================================
    /// `PROGRAM`
    #[token("PROGRAM", ignore(case))]
    KwProgram,

    /// `END_PROGRAM`
    #[token("END_PROGRAM", ignore(case))]
    KwEndProgram,

    /// `FUNCTION`
    #[token("FUNCTION", ignore(case))]
    KwFunction,

    /// `END_FUNCTION`
    #[token("END_FUNCTION", ignore(case))]
    KwEndFunction,

    /// `FUNCTION_BLOCK`
    #[token("FUNCTION_BLOCK", ignore(case))]
    KwFunctionBlock,

    /// `END_FUNCTION_BLOCK`
    #[token("END_FUNCTION_BLOCK", ignore(case))]
    KwEndFunctionBlock,

    // =========================================================================
    // KEYWORDS - Variable sections
    // =========================================================================
    /// `VAR`
    #[token("VAR", ignore(case))]
    KwVar,

    /// `END_VAR`
    #[token("END_VAR", ignore(case))]
    KwEndVar,

    /// `VAR_INPUT`
    #[token("VAR_INPUT", ignore(case))]
    KwVarInput,

    /// `VAR_OUTPUT`
    #[token("VAR_OUTPUT", ignore(case))]
    KwVarOutput,

    /// `VAR_IN_OUT`
    #[token("VAR_IN_OUT", ignore(case))]
    KwVarInOut,

    /// `VAR_TEMP`
    #[token("VAR_TEMP", ignore(case))]
    KwVarTemp,

    /// `VAR_EXTERNAL`
    #[token("VAR_EXTERNAL", ignore(case))]
    KwVarExternal,

    /// `VAR_GLOBAL`
    #[token("VAR_GLOBAL", ignore(case))]
    KwVarGlobal,

    /// `AT` (located variable)
    #[token("AT", ignore(case))]
    KwAt,

    // =========================================================================
    // KEYWORDS - Control flow
    // =========================================================================
    /// `IF`
    #[token("IF", ignore(case))]
    KwIf,

    /// `THEN`
    #[token("THEN", ignore(case))]
    KwThen,

    /// `ELSIF`
    #[token("ELSIF", ignore(case))]
    KwElsif,

    /// `ELSE`
    #[token("ELSE", ignore(case))]
    KwElse,

    /// `END_IF`
    #[token("END_IF", ignore(case))]
    KwEndIf,

    /// `CASE`
    #[token("CASE", ignore(case))]
    KwCase,

    /// `OF`
    #[token("OF", ignore(case))]
    KwOf,

    /// `END_CASE`
    #[token("END_CASE", ignore(case))]
    KwEndCase,

    /// `FOR`
    #[token("FOR", ignore(case))]
    KwFor,

    /// `TO`
    #[token("TO", ignore(case))]
    KwTo,

    /// `BY`
    #[token("BY", ignore(case))]
    KwBy,

    /// `DO`
    #[token("DO", ignore(case))]
    KwDo,

    /// `END_FOR`
    #[token("END_FOR", ignore(case))]
    KwEndFor,

    /// `WHILE`
    #[token("WHILE", ignore(case))]
    KwWhile,

    /// `END_WHILE`
    #[token("END_WHILE", ignore(case))]
    KwEndWhile,

    /// `REPEAT`
    #[token("REPEAT", ignore(case))]
    KwRepeat,

    /// `UNTIL`
    #[token("UNTIL", ignore(case))]
    KwUntil,

    /// `END_REPEAT`
    #[token("END_REPEAT", ignore(case))]
    KwEndRepeat,

    /// `RETURN`
    #[token("RETURN", ignore(case))]
    KwReturn,

    /// `EXIT`
    #[token("EXIT", ignore(case))]
    KwExit,

    /// `CONTINUE`
    #[token("CONTINUE", ignore(case))]
    KwContinue,

    // =========================================================================
    // KEYWORDS - Operators and boolean literals
    // =========================================================================
    /// `AND`
    #[token("AND", ignore(case))]
    KwAnd,

    /// `OR`
    #[token("OR", ignore(case))]
    KwOr,

    /// `XOR`
    #[token("XOR", ignore(case))]
    KwXor,

    /// `NOT`
    #[token("NOT", ignore(case))]
    KwNot,

    /// `MOD`
    #[token("MOD", ignore(case))]
    KwMod,

    /// `TRUE`
    #[token("TRUE", ignore(case))]
    KwTrue,

    /// `FALSE`
    #[token("FALSE", ignore(case))]
    KwFalse,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Integer literal: 42, 1_000, 16#FF, 2#1010
    #[regex(r"[0-9]([0-9]|_[0-9])*")]
    #[regex(r"16#[0-9A-Fa-f]([0-9A-Fa-f]|_[0-9A-Fa-f])*")]
    #[regex(r"2#[01]([01]|_[01])*")]
    #[regex(r"8#[0-7]([0-7]|_[0-7])*")]
    IntLiteral,

    /// Real literal: 3.14, 1.0E10
    #[regex(r"[0-9]([0-9]|_[0-9])*\.[0-9]([0-9]|_[0-9])*([eE][+-]?[0-9]+)?")]
    RealLiteral,

    /// Prefixed literal: T#5s, TIME#1h30m, DT#2024-01-15-14:30:00, INT#5
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*#[A-Za-z0-9_.:+\-]+")]
    TypedLiteral,

    /// `'single quoted'`
    #[regex(r"'([^$'\r\n]|\$.)*'")]
    StringLiteral,

    /// `"double quoted"`
    #[regex(r#""([^$"\r\n]|\$.)*""#)]
    WideStringLiteral,

    /// Direct address: %IX0.0, %QW10
    #[regex(r"%[IQM][XBWDL]?[0-9]+(\.[0-9]+)*")]
    DirectAddress,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    /// Any other word.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    /// Unrecognized input.
    #[default]
    Error,
}

impl TokenKind {
    /// Returns `true` for whitespace, comments, and pragmas.
    #[inline]
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment | Self::Pragma
        )
    }

    /// Returns `true` for keywords that open a program or callable block.
    #[must_use]
    pub fn is_pou_opener(self) -> bool {
        matches!(
            self,
            Self::KwProgram | Self::KwFunction | Self::KwFunctionBlock
        )
    }

    /// Returns `true` for the END_* terminators of control structures.
    #[must_use]
    pub fn is_block_terminator(self) -> bool {
        matches!(
            self,
            Self::KwEndIf | Self::KwEndFor | Self::KwEndWhile | Self::KwEndCase
        )
    }

    /// Returns `true` if the token is a word: an identifier or any keyword.
    #[must_use]
    pub fn is_word(self) -> bool {
        matches!(self, Self::Ident) || self.is_keyword()
    }

    /// Returns `true` if the token is a keyword.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::KwProgram
                | Self::KwEndProgram
                | Self::KwFunction
                | Self::KwEndFunction
                | Self::KwFunctionBlock
                | Self::KwEndFunctionBlock
                | Self::KwVar
                | Self::KwEndVar
                | Self::KwVarInput
                | Self::KwVarOutput
                | Self::KwVarInOut
                | Self::KwVarTemp
                | Self::KwVarExternal
                | Self::KwVarGlobal
                | Self::KwAt
                | Self::KwIf
                | Self::KwThen
                | Self::KwElsif
                | Self::KwElse
                | Self::KwEndIf
                | Self::KwCase
                | Self::KwOf
                | Self::KwEndCase
                | Self::KwFor
                | Self::KwTo
                | Self::KwBy
                | Self::KwDo
                | Self::KwEndFor
                | Self::KwWhile
                | Self::KwEndWhile
                | Self::KwRepeat
                | Self::KwUntil
                | Self::KwEndRepeat
                | Self::KwReturn
                | Self::KwExit
                | Self::KwContinue
                | Self::KwAnd
                | Self::KwOr
                | Self::KwXor
                | Self::KwNot
                | Self::KwMod
                | Self::KwTrue
                | Self::KwFalse
        )
    }
}
