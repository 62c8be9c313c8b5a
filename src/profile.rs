//! Whole-profile aggregation over the per-category heal results
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::estimate::Category;
use crate::factors::FactorsConfig;
use crate::heal::heal;
use crate::result::{HealResult, Savings};
use crate::state::InputState;

/// Color/animation theme signal for the decorative layer. This enum is the
/// entire contract with that layer; no numeric data crosses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Baseline scenario, damage theme.
    Damage,
    /// Behavior-change scenario with positive savings, celebration theme.
    Heal,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mood::Damage => write!(f, "damage"),
            Mood::Heal => write!(f, "heal"),
        }
    }
}

/// Aggregate annual footprint figures for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTotals {
    pub annual_kg: f64,
    pub trees_required: i64,
}

/// Whole-profile summary: one heal run per category, summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub current: ProfileTotals,
    pub target: ProfileTotals,
    pub savings: Savings,
    pub breakdown: BTreeMap<Category, HealResult>,
}

impl ProfileSummary {
    /// Theme for rendering this summary: heal when the behavior change
    /// actually saves something, damage otherwise.
    #[must_use]
    pub fn mood(&self) -> Mood {
        if self.savings.annual_kg > 0.0 {
            Mood::Heal
        } else {
            Mood::Damage
        }
    }
}

/// Run `heal` once per category against a single shared input state and sum
/// the results. The aggregate challenge saving is re-derived from the summed
/// annual saving over the 14-day window.
#[must_use]
pub fn profile_summary(state: &InputState, cfg: &FactorsConfig) -> ProfileSummary {
    let mut summary = ProfileSummary::default();
    for category in Category::ALL {
        let res = heal(category, state, cfg);
        summary.current.annual_kg += res.current.annual_kg;
        summary.current.trees_required += res.current.trees_required;
        summary.savings.annual_kg += res.savings.annual_kg;
        summary.savings.trees_saved += res.savings.trees_saved;
        summary.breakdown.insert(category, res);
    }
    summary.target = ProfileTotals {
        annual_kg: summary.current.annual_kg - summary.savings.annual_kg,
        trees_required: summary.current.trees_required - summary.savings.trees_saved,
    };
    summary.savings.challenge_saved_kg =
        summary.savings.annual_kg / cfg.days_per_year * cfg.challenge_days;
    summary
}
