//! Validator configuration.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::diagnostics::DiagnosticCode;

/// Default cap on the number of lines scanned.
pub const DEFAULT_MAX_LINES: usize = 20_000;

/// Default line count above which decomposition is suggested.
pub const DEFAULT_LARGE_PROGRAM_LINES: usize = 100;

/// Tunables for one [`Validator`](crate::Validator).
///
/// The defaults apply the full rule tables; every knob is opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Lines past this budget are not analyzed.
    pub max_lines: usize,
    /// Programs longer than this get a decomposition suggestion.
    pub large_program_lines: usize,
    /// Diagnostic codes to suppress, e.g. `["W104"]`.
    pub disabled: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            large_program_lines: DEFAULT_LARGE_PROGRAM_LINES,
            disabled: Vec::new(),
        }
    }
}

impl ValidatorConfig {
    /// Resolves `disabled` into codes, skipping entries that name no rule.
    #[must_use]
    pub fn disabled_codes(&self) -> FxHashSet<DiagnosticCode> {
        self.disabled
            .iter()
            .filter_map(|entry| match entry.parse::<DiagnosticCode>() {
                Ok(code) => Some(code),
                Err(err) => {
                    warn!("ignoring disabled entry: {err}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.max_lines, 20_000);
        assert_eq!(config.large_program_lines, 100);
        assert!(config.disabled_codes().is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ValidatorConfig = toml::from_str("disabled = [\"w104\", \"nope\"]").expect("toml");
        assert_eq!(config.max_lines, DEFAULT_MAX_LINES);
        let codes = config.disabled_codes();
        assert_eq!(codes.len(), 1);
        assert!(codes.contains(&DiagnosticCode::MissingSemicolon));
    }
}
