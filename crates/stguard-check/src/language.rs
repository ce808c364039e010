//! Language tags accepted alongside source text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Languages the validator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// IEC 61131-3 Structured Text.
    #[default]
    StructuredText,
}

/// Errors from resolving a language tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    /// The tag names a language this validator does not check.
    #[error("unsupported language '{0}': only Structured Text (st) can be validated")]
    Unsupported(String),
}

impl Language {
    /// Resolves a caller-supplied tag such as `st` or `structured_text`.
    pub fn from_tag(tag: &str) -> Result<Self, LanguageError> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "st" | "structured_text" | "structured-text" | "structuredtext" | "iec-st" => {
                Ok(Self::StructuredText)
            }
            _ => Err(LanguageError::Unsupported(tag.trim().to_string())),
        }
    }

    /// Canonical short tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::StructuredText => "st",
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_tag(value)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
