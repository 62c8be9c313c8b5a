//! Emission factor tables and heal-rule tuning
//!
//! All factors are hardcoded policy, not science; consistency across screens
//! matters more than precision. The canonical numbers live both in
//! `Default` and in the embedded `factors.json` asset so the web bundle can
//! ship the table as data.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::state::{ClothingFreq, PlasticLevel, TransportMode};

const DEFAULT_FACTORS_DATA: &str = include_str!("../assets/data/factors.json");

/// Every constant the estimators and the heal transformer consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorsConfig {
    pub mobility: MobilityFactors,
    pub diet: DietFactors,
    pub energy: EnergyFactors,
    pub consumption: ConsumptionFactors,
    pub heal: HealRules,
    /// kg CO2e absorbed per tree per year.
    pub tree_absorption_kg: f64,
    /// Length of the behavior-change challenge window, in days.
    pub challenge_days: f64,
    pub weeks_per_year: f64,
    pub days_per_year: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobilityFactors {
    /// kg CO2e per km, per mode. Modes absent from the table contribute zero.
    pub kg_per_km: BTreeMap<TransportMode, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietFactors {
    /// Total meals per week (3 a day over 7 days).
    pub meals_per_week: u32,
    pub non_veg_meal_kg: f64,
    pub veg_meal_kg: f64,
    /// Added per day when the user consumes dairy.
    pub dairy_daily_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyFactors {
    /// Grid emission factor, kg CO2e per kWh.
    pub grid_kg_per_kwh: f64,
    pub ac_kwh_per_hour: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionFactors {
    /// Annual kg CO2e per clothing-purchase frequency.
    pub clothing_annual_kg: BTreeMap<ClothingFreq, f64>,
    /// Used when a frequency is missing from a loaded table.
    pub clothing_fallback_kg: f64,
    pub fast_fashion_multiplier: f64,
    /// Annual kg CO2e per plastic-consumption level.
    pub plastic_annual_kg: BTreeMap<PlasticLevel, f64>,
    pub plastic_fallback_kg: f64,
}

/// Fixed behavior-change rules applied by the heal transformer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealRules {
    /// Fraction of car and bike km moved onto cleaner modes.
    pub car_bike_cut: f64,
    pub shift_metro: f64,
    pub shift_bus: f64,
    pub shift_cycle: f64,
    /// Non-veg meals per week replaced by veg meals.
    pub non_veg_meal_cut: u32,
    /// Fractional reduction of monthly kWh.
    pub kwh_cut: f64,
    /// AC hours per day removed, floored at zero.
    pub ac_hours_cut: f64,
}

impl FactorsConfig {
    /// Load the factor tables from the embedded asset, falling back to the
    /// built-in defaults when the asset cannot be parsed.
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_FACTORS_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }
}

impl MobilityFactors {
    #[must_use]
    pub fn factor_for(&self, mode: TransportMode) -> f64 {
        self.kg_per_km.get(&mode).copied().unwrap_or(0.0)
    }
}

impl ConsumptionFactors {
    #[must_use]
    pub fn clothing_kg(&self, freq: ClothingFreq) -> f64 {
        self.clothing_annual_kg
            .get(&freq)
            .copied()
            .unwrap_or(self.clothing_fallback_kg)
    }

    #[must_use]
    pub fn plastic_kg(&self, level: PlasticLevel) -> f64 {
        self.plastic_annual_kg
            .get(&level)
            .copied()
            .unwrap_or(self.plastic_fallback_kg)
    }
}

impl Default for MobilityFactors {
    fn default() -> Self {
        Self {
            kg_per_km: BTreeMap::from([
                (TransportMode::Car, 0.15),
                (TransportMode::Bike, 0.06),
                (TransportMode::Bus, 0.06),
                (TransportMode::Metro, 0.04),
                (TransportMode::Cycle, 0.0),
            ]),
        }
    }
}

impl Default for DietFactors {
    fn default() -> Self {
        Self {
            meals_per_week: 21,
            non_veg_meal_kg: 3.0,
            veg_meal_kg: 1.0,
            dairy_daily_kg: 0.5,
        }
    }
}

impl Default for EnergyFactors {
    fn default() -> Self {
        Self {
            grid_kg_per_kwh: 0.7,
            ac_kwh_per_hour: 1.0,
        }
    }
}

impl Default for ConsumptionFactors {
    fn default() -> Self {
        Self {
            clothing_annual_kg: BTreeMap::from([
                (ClothingFreq::Monthly, 300.0),
                (ClothingFreq::Quarterly, 150.0),
                (ClothingFreq::Biannual, 80.0),
                (ClothingFreq::Rarely, 40.0),
            ]),
            clothing_fallback_kg: 150.0,
            fast_fashion_multiplier: 1.5,
            plastic_annual_kg: BTreeMap::from([
                (PlasticLevel::High, 120.0),
                (PlasticLevel::Medium, 70.0),
                (PlasticLevel::Low, 30.0),
            ]),
            plastic_fallback_kg: 70.0,
        }
    }
}

impl Default for HealRules {
    fn default() -> Self {
        Self {
            car_bike_cut: 0.5,
            shift_metro: 0.4,
            shift_bus: 0.4,
            shift_cycle: 0.2,
            non_veg_meal_cut: 5,
            kwh_cut: 0.15,
            ac_hours_cut: 2.0,
        }
    }
}

impl Default for FactorsConfig {
    fn default() -> Self {
        Self {
            mobility: MobilityFactors::default(),
            diet: DietFactors::default(),
            energy: EnergyFactors::default(),
            consumption: ConsumptionFactors::default(),
            heal: HealRules::default(),
            tree_absorption_kg: 20.0,
            challenge_days: 14.0,
            weeks_per_year: 52.0,
            days_per_year: 365.0,
        }
    }
}
