//! Unified dispatcher over the four category estimators
use serde::{Deserialize, Serialize};

use crate::consumption::estimate_consumption;
use crate::diet::estimate_diet;
use crate::energy::estimate_energy;
use crate::error::EngineError;
use crate::factors::FactorsConfig;
use crate::mobility::estimate_mobility;
use crate::numbers::ceil_f64_to_i64;
use crate::result::{CategoryResult, RawEstimate};
use crate::state::InputState;

/// The four lifestyle domains the engine estimates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mobility,
    Diet,
    Energy,
    Consumption,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Mobility,
        Category::Diet,
        Category::Energy,
        Category::Consumption,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Mobility => write!(f, "mobility"),
            Category::Diet => write!(f, "diet"),
            Category::Energy => write!(f, "energy"),
            Category::Consumption => write!(f, "consumption"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobility" => Ok(Category::Mobility),
            "diet" => Ok(Category::Diet),
            "energy" => Ok(Category::Energy),
            "consumption" => Ok(Category::Consumption),
            other => Err(EngineError::UnknownCategory(other.to_string())),
        }
    }
}

/// Estimate one category's footprint.
///
/// Routes to the category estimator, then appends the shared derived
/// metrics. A failing estimator is logged and degraded to the zero result;
/// estimation never surfaces an error to the caller.
#[must_use]
pub fn estimate(category: Category, state: &InputState, cfg: &FactorsConfig) -> CategoryResult {
    let raw = match category {
        Category::Mobility => estimate_mobility(state, cfg),
        Category::Diet => estimate_diet(state, cfg),
        Category::Energy => estimate_energy(state, cfg),
        Category::Consumption => estimate_consumption(state, cfg),
    };
    match raw {
        Ok(raw) => enrich(raw, cfg),
        Err(err) => {
            log::warn!("estimator for `{category}` failed ({err}); using zero result");
            CategoryResult::zero()
        }
    }
}

/// Estimate from a raw category tag at the presentation boundary.
///
/// Unknown tags degrade to the zero result with a warning instead of
/// failing, so a stale or mistyped tag can never crash the UI.
#[must_use]
pub fn estimate_tag(tag: &str, state: &InputState, cfg: &FactorsConfig) -> CategoryResult {
    match tag.parse::<Category>() {
        Ok(category) => estimate(category, state, cfg),
        Err(err) => {
            log::warn!("{err}; using zero result");
            CategoryResult::zero()
        }
    }
}

fn enrich(raw: RawEstimate, cfg: &FactorsConfig) -> CategoryResult {
    let RawEstimate { daily, annual_kg } = raw;
    CategoryResult {
        daily,
        annual_kg,
        annual_t: annual_kg / 1000.0,
        challenge_14_day: annual_kg / cfg.days_per_year * cfg.challenge_days,
        trees_required: ceil_f64_to_i64(annual_kg / cfg.tree_absorption_kg),
    }
}
