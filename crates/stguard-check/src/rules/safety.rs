//! Safety keyword families.
//!
//! Each family is a list of upper-case fragments matched against the
//! upper-cased line. A hit sets the family's audit flag for the rest of
//! the scan.

use stguard_syntax::SourceLine;
use tracing::trace;

use crate::audit::{SafetyAudit, SafetyFeature};

/// One keyword family and the feature it evidences.
#[derive(Debug, Clone, Copy)]
pub struct SafetyRule {
    /// Feature flagged on a match.
    pub feature: SafetyFeature,
    /// Upper-case fragments; any one matching is enough.
    pub patterns: &'static [&'static str],
    /// What a match means, for rule listings.
    pub message: &'static str,
}

impl SafetyRule {
    /// Returns true if any fragment occurs in `upper`.
    #[must_use]
    pub fn matches(&self, upper: &str) -> bool {
        self.patterns.iter().any(|pattern| upper.contains(pattern))
    }
}

/// The safety keyword families.
pub const SAFETY_RULES: &[SafetyRule] = &[
    SafetyRule {
        feature: SafetyFeature::EmergencyStop,
        patterns: &["EMERGENCY", "E_STOP", "E-STOP", "ESTOP", "SAFETY"],
        message: "emergency stop handling",
    },
    SafetyRule {
        feature: SafetyFeature::SafetyInterlocks,
        patterns: &["INTERLOCK", "SAFETY_GATE", "LIGHT_CURTAIN", "SAFETY_DOOR"],
        message: "safety interlocks",
    },
    SafetyRule {
        feature: SafetyFeature::FailSafeMechanisms,
        patterns: &["FAIL_SAFE", "FAILSAFE", "FAIL-SAFE", "WATCHDOG", "TIMEOUT", "SAFETY_TIME"],
        message: "fail-safe mechanisms",
    },
    SafetyRule {
        feature: SafetyFeature::WatchdogTimer,
        patterns: &["WATCHDOG", "WDT", "TIMER_RESET"],
        message: "watchdog timer",
    },
    SafetyRule {
        feature: SafetyFeature::InputValidation,
        patterns: &["INPUT_VALID", "RANGE_CHECK", "LIMIT_CHECK"],
        message: "input validation",
    },
];

/// Applies every family to `line`.
pub(crate) fn audit_line(audit: &mut SafetyAudit, line: &SourceLine<'_>) {
    for rule in SAFETY_RULES {
        if !audit.has(rule.feature) && rule.matches(line.upper()) {
            trace!(line = line.number(), feature = ?rule.feature, "safety evidence");
            audit.mark(rule.feature);
        }
    }
}
