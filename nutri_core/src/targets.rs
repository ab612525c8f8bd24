//! Daily macro targets derived from energy needs and goal.
//!
//! Calories come from TDEE plus a per-goal delta; protein and fat are dosed
//! per kilogram of body weight; carbohydrates absorb whatever calorie budget
//! remains. Each figure is rounded independently and carbs are solved from
//! the already-rounded values, so the macro calorie-equivalent sum can drift
//! from the stated calorie target by up to 2 kcal.

use crate::types::Goal;

/// Calories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Calories per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Calories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// How a goal shapes the daily targets
struct GoalPolicy {
    /// Added to TDEE (negative for a deficit)
    calorie_delta: f64,
    /// Grams of protein per kg of body weight
    protein_per_kg: f64,
    /// Grams of fat per kg of body weight
    fat_per_kg: f64,
}

fn policy(goal: Goal) -> GoalPolicy {
    match goal {
        Goal::Lose => GoalPolicy {
            calorie_delta: -500.0,
            protein_per_kg: 2.2,
            fat_per_kg: 0.8,
        },
        Goal::Gain => GoalPolicy {
            calorie_delta: 300.0,
            protein_per_kg: 2.0,
            fat_per_kg: 1.0,
        },
        Goal::Maintain => GoalPolicy {
            calorie_delta: 0.0,
            protein_per_kg: 1.8,
            fat_per_kg: 0.9,
        },
    }
}

/// Daily macro targets, rounded to whole kcal/grams
#[derive(Clone, Copy, Debug)]
pub struct MacroTargets {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

/// Allocate daily macros for a given TDEE, body weight and goal.
///
/// Carbs can go negative for extreme inputs (very low weight and height with
/// high age); no floor is applied and the value is reported as computed.
pub fn allocate_macros(tdee: f64, weight_kg: f64, goal: Goal) -> MacroTargets {
    let policy = policy(goal);

    let calories = (tdee + policy.calorie_delta).round();
    let protein_g = (weight_kg * policy.protein_per_kg).round();
    let fats_g = (weight_kg * policy.fat_per_kg).round();
    let carbs_g =
        ((calories - protein_g * KCAL_PER_G_PROTEIN - fats_g * KCAL_PER_G_FAT) / KCAL_PER_G_CARBS)
            .round();

    MacroTargets {
        calories,
        protein_g,
        carbs_g,
        fats_g,
    }
}
