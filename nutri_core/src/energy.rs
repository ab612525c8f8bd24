//! Daily energy estimation.
//!
//! Basal metabolic rate via the Mifflin-St Jeor equation, scaled by a fixed
//! "moderate activity" multiplier to approximate total daily energy
//! expenditure. The coach does not ask for activity level, so the multiplier
//! is a constant rather than an input or a config knob.

use crate::types::{Sex, UserMetrics};

/// Fixed activity multiplier applied to BMR (moderate activity)
pub const ACTIVITY_FACTOR: f64 = 1.55;

/// Estimated daily energy needs (kcal/day)
#[derive(Clone, Copy, Debug)]
pub struct EnergyEstimate {
    /// Basal metabolic rate
    pub bmr: f64,
    /// Total daily energy expenditure (BMR scaled by activity)
    pub tdee: f64,
}

/// Mifflin-St Jeor basal metabolic rate in kcal/day.
///
/// Inputs are not range-checked: zero, negative or NaN values flow through
/// the arithmetic unchanged. Presence is the form's job, plausibility is the
/// user's.
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Estimate BMR and TDEE for a user
pub fn estimate_energy(metrics: &UserMetrics) -> EnergyEstimate {
    let bmr = basal_metabolic_rate(
        metrics.weight_kg,
        metrics.height_cm,
        metrics.age_years,
        metrics.sex,
    );
    EnergyEstimate {
        bmr,
        tdee: bmr * ACTIVITY_FACTOR,
    }
}
