//! Lifestyle input state read by every estimator
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Transport modes recognized by the mobility estimator.
///
/// `Other` absorbs unknown mode tags coming from the presentation layer;
/// such modes carry no emission factor and contribute zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Bike,
    Bus,
    Metro,
    Cycle,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportMode::Car => write!(f, "car"),
            TransportMode::Bike => write!(f, "bike"),
            TransportMode::Bus => write!(f, "bus"),
            TransportMode::Metro => write!(f, "metro"),
            TransportMode::Cycle => write!(f, "cycle"),
            TransportMode::Other => write!(f, "other"),
        }
    }
}

/// How often the user buys new clothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ClothingFreq {
    Monthly,
    #[default]
    Quarterly,
    Biannual,
    Rarely,
}

/// Rough single-use plastic consumption level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum PlasticLevel {
    Low,
    #[default]
    Medium,
    High,
}

/// Lifestyle parameters collected by the presentation layer.
///
/// Every field has a documented default applied when absent from the
/// serialized form; the engine never mutates a caller's state and clones it
/// before deriving a healed variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputState {
    /// Typical one-way commute distance in km/day. Seeds the transport mix
    /// in the UI; the mobility formula itself reads `transport_mix`.
    pub distance: f64,
    /// Travel days per week.
    pub days: u32,
    /// km travelled per day, per mode.
    pub transport_mix: BTreeMap<TransportMode, f64>,
    /// Non-vegetarian meals per week, out of 21 total meals.
    pub non_veg_meals: u32,
    pub has_dairy: bool,
    /// Household electricity use in kWh/month.
    pub monthly_kwh: f64,
    /// Air-conditioner hours per day, modeled at 1 kWh per hour year-round.
    pub ac_hours: f64,
    pub clothing_freq: ClothingFreq,
    pub is_fast_fashion: bool,
    pub plastic_level: PlasticLevel,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            distance: 15.0,
            days: 5,
            transport_mix: BTreeMap::new(),
            non_veg_meals: 0,
            has_dairy: false,
            monthly_kwh: 100.0,
            ac_hours: 0.0,
            clothing_freq: ClothingFreq::default(),
            is_fast_fashion: false,
            plastic_level: PlasticLevel::default(),
        }
    }
}

impl InputState {
    /// km/day for one mode, zero when the mode is absent from the mix.
    #[must_use]
    pub fn mode_km(&self, mode: TransportMode) -> f64 {
        self.transport_mix.get(&mode).copied().unwrap_or(0.0)
    }

    /// Total km/day across the whole mix.
    #[must_use]
    pub fn mix_total_km(&self) -> f64 {
        self.transport_mix.values().copied().sum()
    }
}
