//! Diet estimator: weekly meal mix plus optional dairy
use crate::error::EngineError;
use crate::factors::FactorsConfig;
use crate::result::RawEstimate;
use crate::state::InputState;

/// Non-veg meals are clamped to the weekly total; the remainder are veg
/// meals. Dairy adds a flat daily amount over the whole week.
///
/// # Errors
///
/// Currently never fails; the `Result` keeps the estimator signature uniform
/// across categories.
pub fn estimate_diet(state: &InputState, cfg: &FactorsConfig) -> Result<RawEstimate, EngineError> {
    let non_veg = state.non_veg_meals.min(cfg.diet.meals_per_week);
    let veg = cfg.diet.meals_per_week - non_veg;
    let mut weekly_kg =
        f64::from(non_veg) * cfg.diet.non_veg_meal_kg + f64::from(veg) * cfg.diet.veg_meal_kg;
    if state.has_dairy {
        weekly_kg += cfg.diet.dairy_daily_kg * 7.0;
    }
    Ok(RawEstimate {
        daily: weekly_kg / 7.0,
        annual_kg: weekly_kg * cfg.weeks_per_year,
    })
}
