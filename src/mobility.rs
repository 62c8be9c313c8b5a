//! Mobility estimator: commute emissions from the per-mode transport mix
use crate::error::EngineError;
use crate::factors::FactorsConfig;
use crate::result::RawEstimate;
use crate::state::InputState;

/// Daily emission is the sum of `km * factor` over the transport mix;
/// negative km entries are ignored and unknown modes carry a zero factor.
///
/// # Errors
///
/// Returns [`EngineError::NonFiniteInput`] when a mix entry is NaN or
/// infinite. The dispatcher converts that into a zero result.
pub fn estimate_mobility(
    state: &InputState,
    cfg: &FactorsConfig,
) -> Result<RawEstimate, EngineError> {
    let mut daily = 0.0;
    for (mode, km) in &state.transport_mix {
        if !km.is_finite() {
            return Err(EngineError::NonFiniteInput {
                field: "transportMix",
            });
        }
        if *km > 0.0 {
            daily += km * cfg.mobility.factor_for(*mode);
        }
    }
    let annual_kg = daily * f64::from(state.days) * cfg.weeks_per_year;
    Ok(RawEstimate { daily, annual_kg })
}
