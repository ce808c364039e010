//! Per-line view of a Structured Text source.

use text_size::{TextRange, TextSize};

use crate::lexer::{close_block_comment, lex, Token, TokenKind};

/// One line of source, normalized for keyword matching and tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'src> {
    number: u32,
    raw: &'src str,
    trimmed: &'src str,
    upper: String,
    tokens: Vec<Token>,
    open_comment_depth: usize,
}

impl<'src> SourceLine<'src> {
    /// Builds the view for `raw`, the text of 1-based line `number`.
    #[must_use]
    pub fn new(number: u32, raw: &'src str) -> Self {
        Self::continuing(number, raw, 0)
    }

    /// Builds the view for a line that starts inside a block comment
    /// nested `comment_depth` levels deep.
    ///
    /// Text up to the closing `*)` becomes a single comment token; only
    /// the rest of the line is code. With a depth of 0 this is [`Self::new`].
    #[must_use]
    pub fn continuing(number: u32, raw: &'src str, comment_depth: usize) -> Self {
        let (code_start, still_open) = close_block_comment(raw, comment_depth);

        let mut tokens = Vec::new();
        if code_start > 0 {
            tokens.push(Token::new(
                TokenKind::BlockComment,
                TextRange::up_to(to_size(code_start)),
            ));
        }
        let code = &raw[code_start..];
        let offset = to_size(code_start);
        let code_tokens = lex(code);
        let open_comment_depth = if still_open > 0 {
            still_open
        } else {
            code_tokens
                .last()
                .filter(|token| token.kind == TokenKind::BlockComment)
                .map_or(0, |token| {
                    let text = token.text(code);
                    close_block_comment(text.get(2..).unwrap_or_default(), 1).1
                })
        };
        tokens.extend(
            code_tokens
                .into_iter()
                .map(|token| Token::new(token.kind, token.range + offset)),
        );

        let trimmed = code.trim();
        Self {
            number,
            raw,
            trimmed,
            upper: trimmed.to_ascii_uppercase(),
            tokens,
            open_comment_depth,
        }
    }

    /// Depth of the block comment left open at the end of the line.
    ///
    /// Feed it to [`Self::continuing`] for the next line.
    #[must_use]
    pub fn open_comment_depth(&self) -> usize {
        self.open_comment_depth
    }

    /// 1-based line number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The line exactly as it appeared in the source.
    #[must_use]
    pub fn raw(&self) -> &'src str {
        self.raw
    }

    /// The code part of the line without surrounding whitespace.
    ///
    /// On a line that starts inside a block comment, this is the text
    /// after the closing `*)`.
    #[must_use]
    pub fn trimmed(&self) -> &'src str {
        self.trimmed
    }

    /// The trimmed line, ASCII upper-cased.
    #[must_use]
    pub fn upper(&self) -> &str {
        &self.upper
    }

    /// Blank lines, lines that open with a comment, and lines that lie
    /// entirely inside a block comment take no part in the scan.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.trimmed.is_empty() || self.trimmed.starts_with("(*") || self.trimmed.starts_with("//")
    }

    /// All tokens, trivia included.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens that are not whitespace, comments, or pragmas.
    pub fn significant(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(|token| !token.kind.is_trivia())
    }

    /// Kind of the first significant token.
    #[must_use]
    pub fn first_kind(&self) -> Option<TokenKind> {
        self.significant().next().map(|token| token.kind)
    }

    /// Last token that is not whitespace, comments included.
    #[must_use]
    pub fn last_visible(&self) -> Option<&Token> {
        self.tokens
            .iter()
            .rev()
            .find(|token| token.kind != TokenKind::Whitespace)
    }

    /// First token of `kind` on the line.
    #[must_use]
    pub fn find(&self, kind: TokenKind) -> Option<&Token> {
        self.tokens.iter().find(|token| token.kind == kind)
    }

    /// Returns true if a token of `kind` appears on the line.
    #[must_use]
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.find(kind).is_some()
    }

    /// Number of tokens of `kind` on the line.
    #[must_use]
    pub fn count(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|token| token.kind == kind).count()
    }

    /// Text of `token` within this line.
    #[must_use]
    pub fn text(&self, token: &Token) -> &'src str {
        token.text(self.raw)
    }

    /// 1-based character column of `token` within the raw line.
    #[must_use]
    pub fn column(&self, token: &Token) -> u32 {
        self.column_at(token.range.start())
    }

    /// 1-based character column of a byte offset within the raw line.
    #[must_use]
    pub fn column_at(&self, offset: TextSize) -> u32 {
        let end = usize::from(offset).min(self.raw.len());
        let chars = self.raw.get(..end).map_or(0, |prefix| prefix.chars().count());
        u32::try_from(chars).map_or(u32::MAX, |chars| chars.saturating_add(1))
    }
}

fn to_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}

/// Splits `source` into numbered lines, accepting `\n` and `\r\n` endings.
///
/// Block comments that span lines are carried from one line to the next.
pub fn source_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut comment_depth = 0;
    source.lines().zip(1u32..).map(move |(raw, number)| {
        let line = SourceLine::continuing(number, raw, comment_depth);
        comment_depth = line.open_comment_depth();
        line
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let line = SourceLine::new(3, "   motor := Start;  ");
        assert_eq!(line.number(), 3);
        assert_eq!(line.trimmed(), "motor := Start;");
        assert_eq!(line.upper(), "MOTOR := START;");
        assert!(!line.is_skipped());
    }

    #[test]
    fn test_skipped_lines() {
        assert!(SourceLine::new(1, "").is_skipped());
        assert!(SourceLine::new(1, "   \t").is_skipped());
        assert!(SourceLine::new(1, "(* header *)").is_skipped());
        assert!(SourceLine::new(1, "  // note").is_skipped());
        assert!(!SourceLine::new(1, "x := 1; // trailing").is_skipped());
    }

    #[test]
    fn test_columns_are_character_based() {
        let line = SourceLine::new(1, "  ä := b;");
        let assign = line.find(TokenKind::Assign).expect("assign token");
        assert_eq!(line.column(assign), 5);
    }

    #[test]
    fn test_last_visible_includes_trailing_comment() {
        let line = SourceLine::new(1, "x := 1; // done  ");
        let last = line.last_visible().expect("token");
        assert_eq!(last.kind, TokenKind::LineComment);
        let line = SourceLine::new(1, "x := 1;   ");
        assert_eq!(line.last_visible().map(|t| t.kind), Some(TokenKind::Semicolon));
        assert!(SourceLine::new(1, "   ").last_visible().is_none());
    }

    #[test]
    fn test_open_comment_depth() {
        assert_eq!(SourceLine::new(1, "(* header").open_comment_depth(), 1);
        assert_eq!(SourceLine::new(1, "(* a (* b *)").open_comment_depth(), 1);
        assert_eq!(SourceLine::new(1, "x := 1; (* note").open_comment_depth(), 1);
        assert_eq!(SourceLine::new(1, "(* closed *)").open_comment_depth(), 0);
        assert_eq!(SourceLine::new(1, "x := 1; // (* not a block").open_comment_depth(), 0);
        assert_eq!(SourceLine::new(1, "msg := '(*';").open_comment_depth(), 0);
    }

    #[test]
    fn test_continuing_line_inside_comment() {
        let line = SourceLine::continuing(4, "  for safety (see manual)", 1);
        assert!(line.is_skipped());
        assert_eq!(line.first_kind(), None);
        assert_eq!(line.count(TokenKind::LParen), 0);
        assert_eq!(line.open_comment_depth(), 1);
    }

    #[test]
    fn test_continuing_line_closes_comment() {
        let line = SourceLine::continuing(5, "  end *) run := TRUE;", 1);
        assert!(!line.is_skipped());
        assert_eq!(line.trimmed(), "run := TRUE;");
        assert_eq!(line.first_kind(), Some(TokenKind::Ident));
        let assign = line.find(TokenKind::Assign).expect("assign token");
        assert_eq!(line.column(assign), 14);
        assert_eq!(line.open_comment_depth(), 0);

        assert!(SourceLine::continuing(5, "*)", 1).is_skipped());
    }

    #[test]
    fn test_source_lines_carry_comments() {
        let source = "(*\n  If the sensor fails\n*)\nrun := TRUE;";
        let kept: Vec<_> = source_lines(source)
            .filter(|line| !line.is_skipped())
            .map(|line| line.number())
            .collect();
        assert_eq!(kept, [4]);
    }

    #[test]
    fn test_source_lines_numbering() {
        let lines: Vec<_> = source_lines("a\r\nb\n\nc").collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].raw(), "b");
        assert_eq!(lines[3].number(), 4);
    }
}
