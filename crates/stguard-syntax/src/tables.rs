//! Keyword, type, and identifier tables.
//!
//! These sets are part of the report contract: changing a member changes
//! which diagnostics a given program produces.

/// Reserved words that may not be used as declared identifiers.
///
/// Covers section, control-flow, boolean, and operator keywords.
pub const RESERVED_WORDS: &[&str] = &[
    // Sections and organization units
    "PROGRAM",
    "END_PROGRAM",
    "FUNCTION",
    "END_FUNCTION",
    "FUNCTION_BLOCK",
    "END_FUNCTION_BLOCK",
    "VAR",
    "VAR_INPUT",
    "VAR_OUTPUT",
    "VAR_IN_OUT",
    "VAR_TEMP",
    "VAR_EXTERNAL",
    "VAR_GLOBAL",
    "END_VAR",
    "CONSTANT",
    "RETAIN",
    // Control flow
    "IF",
    "THEN",
    "ELSIF",
    "ELSE",
    "END_IF",
    "CASE",
    "OF",
    "END_CASE",
    "FOR",
    "TO",
    "BY",
    "DO",
    "END_FOR",
    "WHILE",
    "END_WHILE",
    "REPEAT",
    "UNTIL",
    "END_REPEAT",
    "RETURN",
    "EXIT",
    "CONTINUE",
    // Boolean literals
    "TRUE",
    "FALSE",
    // Operators
    "AND",
    "OR",
    "XOR",
    "NOT",
    "MOD",
];

/// IEC 61131-3 elementary data types.
pub const STANDARD_TYPES: &[&str] = &[
    "BOOL",
    "SINT",
    "INT",
    "DINT",
    "LINT",
    "USINT",
    "UINT",
    "UDINT",
    "ULINT",
    "REAL",
    "LREAL",
    "TIME",
    "DATE",
    "TIME_OF_DAY",
    "TOD",
    "DATE_AND_TIME",
    "DT",
    "STRING",
    "WSTRING",
    "BYTE",
    "WORD",
    "DWORD",
    "LWORD",
];

/// Keywords that open a declaration section.
pub const DECLARATION_SECTION_KEYWORDS: &[&str] = &[
    "VAR",
    "VAR_INPUT",
    "VAR_OUTPUT",
    "VAR_IN_OUT",
    "VAR_TEMP",
    "VAR_EXTERNAL",
    "VAR_GLOBAL",
];

/// The line that closes a declaration section.
pub const DECLARATION_SECTION_END: &str = "END_VAR";

/// Returns true if `name` is a reserved word, ignoring case.
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}

/// Returns true if `word` opens a declaration section, ignoring case.
#[must_use]
pub fn is_declaration_section_keyword(word: &str) -> bool {
    DECLARATION_SECTION_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(word))
}

/// Returns true if `type_name` is an IEC 61131-3 elementary type, ignoring case.
#[must_use]
pub fn is_standard_type(type_name: &str) -> bool {
    STANDARD_TYPES
        .iter()
        .any(|ty| ty.eq_ignore_ascii_case(type_name))
}

/// Returns true if `name` starts with a letter and continues with letters,
/// digits, or underscores only.
#[must_use]
pub fn follows_naming_convention(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
