//! Quality scores derived from the findings.

use crate::audit::SafetyAudit;
use crate::diagnostics::{Category, Diagnostic};

/// The three 0..=100 scores of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    /// 100 - 15 per error - 5 per warning, floored at 0.
    pub syntax: u8,
    /// 100 - 20 per Semantics error, floored at 0.
    pub logic: u8,
    /// 20 per safety feature seen, capped at 100.
    pub safety: u8,
}

impl Scores {
    /// Computes the scores.
    #[must_use]
    pub fn compute(errors: &[Diagnostic], warnings: &[Diagnostic], safety: &SafetyAudit) -> Self {
        let semantic_errors = errors
            .iter()
            .filter(|diag| diag.category == Category::Semantics)
            .count();
        Self {
            syntax: penalize(&[(errors.len(), 15), (warnings.len(), 5)]),
            logic: penalize(&[(semantic_errors, 20)]),
            safety: clamp(u64::from(safety.count()) * 20),
        }
    }
}

fn penalize(weights: &[(usize, u64)]) -> u8 {
    let penalty = weights.iter().fold(0u64, |total, (count, weight)| {
        let count = u64::try_from(*count).unwrap_or(u64::MAX);
        total.saturating_add(count.saturating_mul(*weight))
    });
    clamp(100u64.saturating_sub(penalty))
}

fn clamp(value: u64) -> u8 {
    u8::try_from(value.min(100)).unwrap_or(100)
}
