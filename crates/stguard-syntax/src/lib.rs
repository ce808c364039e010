//! `stguard-syntax` - Line-level lexing for IEC 61131-3 Structured Text.
//!
//! This crate provides the low-level view the validator scans with:
//!
//! - **Lexer**: Tokenizes one line into a flat token stream
//! - **Lines**: Numbered, trimmed, upper-cased, tokenized source lines
//! - **Tables**: Reserved words, elementary types, and naming rules
//!
//! There is no parser here. Checks run on one line at a time,
//! so malformed input degrades into odd tokens instead of failures.
//!
//! # Example
//!
//! ```
//! use stguard_syntax::{SourceLine, TokenKind};
//!
//! let line = SourceLine::new(1, "  IF start THEN");
//! assert_eq!(line.first_kind(), Some(TokenKind::KwIf));
//! assert!(line.contains(TokenKind::KwThen));
//! assert_eq!(line.upper(), "IF START THEN");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod lexer;
pub mod line;
pub mod tables;

pub use lexer::{lex, Lexer, Token, TokenKind};
pub use line::{source_lines, SourceLine};
pub use tables::{follows_naming_convention, is_reserved_word, is_standard_type};
