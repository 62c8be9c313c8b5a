//! Result value types returned across the engine boundary
use serde::{Deserialize, Serialize};

/// Pre-enrichment output of a single category estimator.
///
/// Only `daily` and `annual_kg` are category-specific; the dispatcher
/// derives the shared fields of [`CategoryResult`] from `annual_kg`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawEstimate {
    pub daily: f64,
    pub annual_kg: f64,
}

/// One category's footprint, enriched with the shared derived metrics.
///
/// Invariants: `annual_t == annual_kg / 1000` and
/// `trees_required == ceil(annual_kg / 20)`; both are derived by the
/// dispatcher, never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    /// kg CO2e per day.
    pub daily: f64,
    pub annual_kg: f64,
    /// Tonnes, `annual_kg / 1000`.
    pub annual_t: f64,
    /// Projected kg over the 14-day challenge window.
    pub challenge_14_day: f64,
    /// Trees needed to absorb the annual figure, at 20 kg per tree per year.
    pub trees_required: i64,
}

impl CategoryResult {
    /// Fallback result used when an estimator fails or a tag is unknown.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Savings between the current and the healed scenario. Every field is
/// clamped at zero; a healed state can never report negative savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    pub annual_kg: f64,
    pub trees_saved: i64,
    pub challenge_saved_kg: f64,
}

/// Output of the heal transformer: the baseline, the behavior-change
/// projection, and the clamped deltas between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HealResult {
    pub current: CategoryResult,
    pub target: CategoryResult,
    pub savings: Savings,
}
