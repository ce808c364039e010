//! Safety and IEC-compliance evidence gathered during a scan.

use serde::{Deserialize, Serialize};

/// Safety features the rule engine looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SafetyFeature {
    /// Emergency stop handling.
    EmergencyStop,
    /// Guard, door, or light-curtain interlocks.
    SafetyInterlocks,
    /// Fail-safe states and timeouts.
    FailSafeMechanisms,
    /// Watchdog supervision.
    WatchdogTimer,
    /// Range or limit checks on inputs.
    InputValidation,
}

impl SafetyFeature {
    /// Every feature, in report order.
    pub const ALL: [SafetyFeature; 5] = [
        Self::EmergencyStop,
        Self::SafetyInterlocks,
        Self::FailSafeMechanisms,
        Self::WatchdogTimer,
        Self::InputValidation,
    ];

    /// Field name used in the serialized report.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::EmergencyStop => "emergencyStop",
            Self::SafetyInterlocks => "safetyInterlocks",
            Self::FailSafeMechanisms => "failSafeMechanisms",
            Self::WatchdogTimer => "watchdogTimer",
            Self::InputValidation => "inputValidation",
        }
    }
}

/// Which safety features the program shows evidence of.
///
/// Flags only ever go from `false` to `true` within one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAudit {
    /// Emergency stop handling seen.
    pub emergency_stop: bool,
    /// Interlocks seen.
    pub safety_interlocks: bool,
    /// Fail-safe or timeout handling seen.
    pub fail_safe_mechanisms: bool,
    /// Watchdog supervision seen.
    pub watchdog_timer: bool,
    /// Input range or limit checks seen.
    pub input_validation: bool,
}

impl SafetyAudit {
    /// Records evidence of `feature`.
    pub fn mark(&mut self, feature: SafetyFeature) {
        *self.flag_mut(feature) = true;
    }

    /// Returns whether `feature` has been seen.
    #[must_use]
    pub fn has(&self, feature: SafetyFeature) -> bool {
        match feature {
            SafetyFeature::EmergencyStop => self.emergency_stop,
            SafetyFeature::SafetyInterlocks => self.safety_interlocks,
            SafetyFeature::FailSafeMechanisms => self.fail_safe_mechanisms,
            SafetyFeature::WatchdogTimer => self.watchdog_timer,
            SafetyFeature::InputValidation => self.input_validation,
        }
    }

    /// Number of features seen.
    #[must_use]
    pub fn count(&self) -> u32 {
        let seen = SafetyFeature::ALL
            .into_iter()
            .filter(|feature| self.has(*feature))
            .count();
        u32::try_from(seen).unwrap_or(u32::MAX)
    }

    fn flag_mut(&mut self, feature: SafetyFeature) -> &mut bool {
        match feature {
            SafetyFeature::EmergencyStop => &mut self.emergency_stop,
            SafetyFeature::SafetyInterlocks => &mut self.safety_interlocks,
            SafetyFeature::FailSafeMechanisms => &mut self.fail_safe_mechanisms,
            SafetyFeature::WatchdogTimer => &mut self.watchdog_timer,
            SafetyFeature::InputValidation => &mut self.input_validation,
        }
    }
}

/// Evidence that the program follows IEC 61131-3 structural conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceAudit {
    /// At least one declaration section was opened.
    pub variable_declaration_present: bool,
    /// At least one declaration used an elementary type.
    pub standard_data_type_used: bool,
    /// At least one END_IF/END_FOR/END_WHILE/END_CASE was seen.
    pub block_structure_compliant: bool,
    /// Starts `true`; the only flag that can flip back to `false`.
    pub naming_convention_followed: bool,
}

impl Default for ComplianceAudit {
    fn default() -> Self {
        Self {
            variable_declaration_present: false,
            standard_data_type_used: false,
            block_structure_compliant: false,
            naming_convention_followed: true,
        }
    }
}
