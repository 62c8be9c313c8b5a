//! Heal transformer properties: clamped savings, non-aliasing, and the
//! per-category behavior-change rules end to end.
use std::collections::BTreeMap;

use vision4life_engine::{
    Category, ClothingFreq, FactorsConfig, InputState, PlasticLevel, TransportMode, heal,
    profile_summary,
};

const EPS: f64 = 1e-9;

fn mix(entries: &[(TransportMode, f64)]) -> BTreeMap<TransportMode, f64> {
    entries.iter().copied().collect()
}

fn heavy_state() -> InputState {
    InputState {
        transport_mix: mix(&[(TransportMode::Car, 15.0), (TransportMode::Bike, 6.0)]),
        non_veg_meals: 7,
        has_dairy: true,
        monthly_kwh: 150.0,
        ac_hours: 3.0,
        clothing_freq: ClothingFreq::Monthly,
        is_fast_fashion: true,
        plastic_level: PlasticLevel::High,
        ..InputState::default()
    }
}

#[test]
fn diet_heal_example() {
    let cfg = FactorsConfig::default_config();
    let state = InputState {
        non_veg_meals: 7,
        has_dairy: true,
        ..InputState::default()
    };
    let res = heal(Category::Diet, &state, &cfg);
    assert!((res.current.annual_kg - 2002.0).abs() < EPS);
    // Healed: 2 non-veg meals, no dairy -> 2*3 + 19*1 = 25 kg/week
    assert!((res.target.annual_kg - 1300.0).abs() < EPS);
    assert!(res.target.annual_kg < res.current.annual_kg);
    assert!((res.savings.annual_kg - (res.current.annual_kg - res.target.annual_kg)).abs() < EPS);
    assert_eq!(
        res.savings.trees_saved,
        res.current.trees_required - res.target.trees_required
    );
}

#[test]
fn savings_never_go_negative() {
    let cfg = FactorsConfig::default_config();
    let states = [
        InputState::default(),
        heavy_state(),
        // Already minimal: the heal rules have nothing left to improve.
        InputState {
            transport_mix: mix(&[(TransportMode::Cycle, 10.0)]),
            monthly_kwh: 0.0,
            clothing_freq: ClothingFreq::Rarely,
            plastic_level: PlasticLevel::Low,
            ..InputState::default()
        },
    ];
    for state in &states {
        for category in Category::ALL {
            let res = heal(category, state, &cfg);
            assert!(res.savings.annual_kg >= 0.0, "{category}");
            assert!(res.savings.trees_saved >= 0, "{category}");
            assert!(res.savings.challenge_saved_kg >= 0.0, "{category}");
        }
    }
}

#[test]
fn heal_improves_every_category_of_a_heavy_lifestyle() {
    let cfg = FactorsConfig::default_config();
    let state = heavy_state();
    for category in Category::ALL {
        let res = heal(category, &state, &cfg);
        assert!(
            res.target.annual_kg < res.current.annual_kg,
            "{category} did not improve"
        );
    }
}

#[test]
fn heal_does_not_alias_the_callers_state() {
    let cfg = FactorsConfig::default_config();
    let mut state = heavy_state();
    let snapshot = state.clone();

    let first = heal(Category::Mobility, &state, &cfg);
    // The caller keeps mutating its live state after the call.
    state.transport_mix.insert(TransportMode::Car, 999.0);
    state.non_veg_meals = 21;

    assert!((state.mode_km(TransportMode::Car) - 999.0).abs() < EPS);
    let replay = heal(Category::Mobility, &snapshot, &cfg);
    assert_eq!(first, replay);
    // And the original snapshot itself was never touched by heal.
    assert!((snapshot.mode_km(TransportMode::Car) - 15.0).abs() < EPS);
}

#[test]
fn energy_heal_rounds_kwh_and_floors_ac() {
    let cfg = FactorsConfig::default_config();
    let state = InputState {
        monthly_kwh: 150.0,
        ac_hours: 1.0,
        ..InputState::default()
    };
    let res = heal(Category::Energy, &state, &cfg);
    // Healed: round(150*0.85) = 128 kWh/month, AC floored at 0
    let expected_kwh = 128.0 * 12.0;
    assert!((res.target.annual_kg - expected_kwh * 0.7).abs() < EPS);
}

#[test]
fn consumption_heal_hits_the_floor_bundle() {
    let cfg = FactorsConfig::default_config();
    let res = heal(Category::Consumption, &heavy_state(), &cfg);
    // rarely + low plastic = 40 + 30
    assert!((res.target.annual_kg - 70.0).abs() < EPS);
    // current: 300*1.5 + 120 = 570
    assert!((res.current.annual_kg - 570.0).abs() < EPS);
    assert!((res.savings.annual_kg - 500.0).abs() < EPS);
}

#[test]
fn profile_summary_aggregates_the_four_heals() {
    let cfg = FactorsConfig::default_config();
    let state = heavy_state();
    let summary = profile_summary(&state, &cfg);

    let mut kg = 0.0;
    let mut saved = 0.0;
    for category in Category::ALL {
        let res = heal(category, &state, &cfg);
        kg += res.current.annual_kg;
        saved += res.savings.annual_kg;
    }
    assert!((summary.current.annual_kg - kg).abs() < EPS);
    assert!((summary.savings.annual_kg - saved).abs() < EPS);
    assert!((summary.target.annual_kg - (kg - saved)).abs() < EPS);
    assert!((summary.savings.challenge_saved_kg - saved / 365.0 * 14.0).abs() < EPS);
    assert_eq!(summary.mood(), vision4life_engine::Mood::Heal);
}
