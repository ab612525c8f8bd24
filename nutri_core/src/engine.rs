//! Plan generation pipeline.
//!
//! Composes the calculator stages in order: energy estimate, macro
//! allocation, meal composition, tip selection. The whole pipeline is a pure
//! function of the user metrics; identical inputs always produce the same
//! plan.

use crate::energy::estimate_energy;
use crate::meals::compose_meals;
use crate::targets::allocate_macros;
use crate::tips::tips_for_goal;
use crate::types::{DietPlan, UserMetrics};

/// Generate a complete diet plan for a user.
///
/// Cannot fail: the arithmetic is total over the extended reals, so malformed
/// numeric input surfaces as NaN in the resulting plan rather than an error.
pub fn generate_plan(metrics: &UserMetrics) -> DietPlan {
    let energy = estimate_energy(metrics);
    tracing::debug!(
        "Energy estimate: BMR {:.2} kcal, TDEE {:.2} kcal",
        energy.bmr,
        energy.tdee
    );

    let targets = allocate_macros(energy.tdee, metrics.weight_kg, metrics.goal);
    let meals = compose_meals(&targets, metrics.goal);
    let tips = tips_for_goal(metrics.goal, metrics.body_fat_pct);

    tracing::info!(
        "Generated {:?} plan: {} kcal, P {}g / C {}g / F {}g",
        metrics.goal,
        targets.calories,
        targets.protein_g,
        targets.carbs_g,
        targets.fats_g
    );

    DietPlan {
        calories: targets.calories,
        protein_g: targets.protein_g,
        carbs_g: targets.carbs_g,
        fats_g: targets.fats_g,
        meals,
        tips,
    }
}
