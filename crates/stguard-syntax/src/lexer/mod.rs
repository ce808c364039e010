//! Lexer for single lines of IEC 61131-3 Structured Text.
//!
//! The validator never builds a tree; it only needs each line as a flat
//! token stream with byte ranges, so this lexer is a thin iterator over
//! the `logos` generated state machine.

mod tokens;

pub use tokens::TokenKind;

use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the lexed text.
    pub range: TextRange,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Returns the text of this token within `source`.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range]
    }
}

/// Iterator over the tokens of a piece of source text.
///
/// Unrecognized characters come back as [`TokenKind::Error`]; the lexer
/// never fails.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?.unwrap_or(TokenKind::Error);
        let span = self.inner.span();
        let range = TextRange::new(to_size(span.start), to_size(span.end));
        Some(Token::new(kind, range))
    }
}

fn to_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}

/// Scans `text` from inside a block comment nested `depth` levels deep.
///
/// Returns the byte offset just past the `*)` that closes the outermost
/// level, and the depth still open at the end of `text` (0 once closed).
#[must_use]
pub fn close_block_comment(text: &str, mut depth: usize) -> (usize, usize) {
    let bytes = text.as_bytes();
    let mut i = 0usize;

    while depth > 0 && i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'(', b'*') => {
                depth += 1;
                i += 2;
            }
            (b'*', b')') => {
                depth -= 1;
                i += 2;
            }
            _ => i += 1,
        }
    }

    if depth == 0 {
        (i, 0)
    } else {
        (bytes.len(), depth)
    }
}

/// Lex the entire source and return all tokens, trivia included.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex source and return tokens paired with their text.
#[must_use]
pub fn lex_with_text(source: &str) -> Vec<(Token, &str)> {
    Lexer::new(source)
        .map(|token| (token, token.text(source)))
        .collect()
}
