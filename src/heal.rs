//! Heal transformer: projects a fixed 14-day behavior change per category
//!
//! The healed state is always derived from a fresh clone of the caller's
//! input; the original is never touched.
use crate::estimate::{Category, estimate};
use crate::factors::{FactorsConfig, HealRules};
use crate::result::{HealResult, Savings};
use crate::state::{ClothingFreq, InputState, PlasticLevel, TransportMode};

/// Compute the baseline, the behavior-change projection, and the savings
/// between them for one category. Savings are clamped at zero.
#[must_use]
pub fn heal(category: Category, state: &InputState, cfg: &FactorsConfig) -> HealResult {
    let current = estimate(category, state, cfg);
    let mut healed = state.clone();
    apply_heal_rule(category, &mut healed, &cfg.heal);
    let target = estimate(category, &healed, cfg);
    let savings = Savings {
        annual_kg: (current.annual_kg - target.annual_kg).max(0.0),
        trees_saved: (current.trees_required - target.trees_required).max(0),
        challenge_saved_kg: (current.challenge_14_day - target.challenge_14_day).max(0.0),
    };
    HealResult {
        current,
        target,
        savings,
    }
}

/// Apply the fixed behavior-change rule for one category in place.
///
/// Mobility halves car and bike km and moves the cut onto metro, bus and
/// cycle at 40/40/20. A rounding shortfall is added back to cycle so the
/// mix never loses distance; that residual can overshoot the 20% cycle
/// share, and rounding up the shares can overshoot the total slightly.
/// Keeping every km on some mode wins over exact proportions.
pub fn apply_heal_rule(category: Category, state: &mut InputState, rules: &HealRules) {
    match category {
        Category::Mobility => {
            let old_total = state.mix_total_km();
            let mut shift = 0.0;
            for mode in [TransportMode::Car, TransportMode::Bike] {
                if let Some(km) = state.transport_mix.get_mut(&mode) {
                    if *km > 0.0 {
                        let cut = (*km * rules.car_bike_cut).round();
                        *km -= cut;
                        shift += cut;
                    }
                }
            }
            if shift > 0.0 {
                for (mode, share) in [
                    (TransportMode::Metro, rules.shift_metro),
                    (TransportMode::Bus, rules.shift_bus),
                    (TransportMode::Cycle, rules.shift_cycle),
                ] {
                    *state.transport_mix.entry(mode).or_insert(0.0) += (shift * share).round();
                }
                let new_total = state.mix_total_km();
                if new_total < old_total {
                    *state.transport_mix.entry(TransportMode::Cycle).or_insert(0.0) +=
                        old_total - new_total;
                }
            }
        }
        Category::Diet => {
            state.non_veg_meals = state.non_veg_meals.saturating_sub(rules.non_veg_meal_cut);
            state.has_dairy = false;
        }
        Category::Energy => {
            state.monthly_kwh = (state.monthly_kwh * (1.0 - rules.kwh_cut)).round();
            state.ac_hours = (state.ac_hours - rules.ac_hours_cut).max(0.0);
        }
        Category::Consumption => {
            state.clothing_freq = ClothingFreq::Rarely;
            state.is_fast_fashion = false;
            state.plastic_level = PlasticLevel::Low;
        }
    }
}
