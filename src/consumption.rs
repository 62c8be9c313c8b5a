//! Consumption estimator: clothing and single-use plastic
//!
//! Deliberately categorical: both tables map a habit bucket to a fixed
//! annual kg figure, and `daily` is that figure spread over the year so the
//! result keeps the shared schema of the continuous categories.
use crate::error::EngineError;
use crate::factors::FactorsConfig;
use crate::result::RawEstimate;
use crate::state::InputState;

/// # Errors
///
/// Currently never fails; the `Result` keeps the estimator signature uniform
/// across categories.
pub fn estimate_consumption(
    state: &InputState,
    cfg: &FactorsConfig,
) -> Result<RawEstimate, EngineError> {
    let mut clothing_kg = cfg.consumption.clothing_kg(state.clothing_freq);
    if state.is_fast_fashion {
        clothing_kg *= cfg.consumption.fast_fashion_multiplier;
    }
    let plastic_kg = cfg.consumption.plastic_kg(state.plastic_level);
    let annual_kg = clothing_kg + plastic_kg;
    Ok(RawEstimate {
        daily: annual_kg / cfg.days_per_year,
        annual_kg,
    })
}
