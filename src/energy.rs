//! Home energy estimator: grid electricity plus air conditioning
use crate::error::EngineError;
use crate::factors::FactorsConfig;
use crate::result::RawEstimate;
use crate::state::InputState;

/// Annual kWh is twelve months of household draw plus AC hours applied
/// year-round at a fixed kWh per hour; the grid factor converts to kg CO2e.
///
/// # Errors
///
/// Returns [`EngineError::NonFiniteInput`] when `monthly_kwh` or `ac_hours`
/// is NaN or infinite. The dispatcher converts that into a zero result.
pub fn estimate_energy(
    state: &InputState,
    cfg: &FactorsConfig,
) -> Result<RawEstimate, EngineError> {
    if !state.monthly_kwh.is_finite() {
        return Err(EngineError::NonFiniteInput {
            field: "monthlyKwh",
        });
    }
    if !state.ac_hours.is_finite() {
        return Err(EngineError::NonFiniteInput { field: "acHours" });
    }
    let total_kwh = state.monthly_kwh.max(0.0) * 12.0
        + state.ac_hours.max(0.0) * cfg.energy.ac_kwh_per_hour * cfg.days_per_year;
    let annual_kg = total_kwh * cfg.energy.grid_kg_per_kwh;
    Ok(RawEstimate {
        daily: annual_kg / cfg.days_per_year,
        annual_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn household_plus_ac() {
        let state = InputState {
            monthly_kwh: 150.0,
            ac_hours: 3.0,
            ..InputState::default()
        };
        let raw = estimate_energy(&state, &FactorsConfig::default()).unwrap();
        // 150*12 + 3*365 = 2895 kWh
        assert!((raw.annual_kg - 2026.5).abs() < 1e-9);
        assert!((raw.daily - 2026.5 / 365.0).abs() < 1e-9);
    }

    #[test]
    fn negative_inputs_are_treated_as_zero() {
        let state = InputState {
            monthly_kwh: -50.0,
            ac_hours: -1.0,
            ..InputState::default()
        };
        let raw = estimate_energy(&state, &FactorsConfig::default()).unwrap();
        assert!(raw.annual_kg.abs() < f64::EPSILON);
    }

    #[test]
    fn non_finite_kwh_is_rejected() {
        let state = InputState {
            monthly_kwh: f64::INFINITY,
            ..InputState::default()
        };
        assert!(estimate_energy(&state, &FactorsConfig::default()).is_err());
    }
}
