//! Core domain types for the Mais Vida nutrition coach.
//!
//! This module defines the fundamental types used throughout the system:
//! - User metrics (weight, height, age, sex, goal)
//! - Training goals and their display strings
//! - The computed diet plan

use serde::{Deserialize, Serialize};

// ============================================================================
// User Input Types
// ============================================================================

/// Biological sex, as used by the Mifflin-St Jeor equation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// UI label, as shown on the coach screen
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Feminino",
        }
    }
}

/// Training goal selected by the user
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Cut: calorie deficit, high protein
    Lose,
    /// Bulk: calorie surplus
    Gain,
    /// Recomposition / hold steady
    Maintain,
}

impl Goal {
    /// UI label, as shown on the coach screen
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Lose => "Perder Gordura",
            Goal::Gain => "Ganhar Massa Muscular",
            Goal::Maintain => "Manter Forma Atual",
        }
    }

    /// Short UI description shown under the label
    pub fn description(&self) -> &'static str {
        match self {
            Goal::Lose => "Definição e emagrecimento",
            Goal::Gain => "Hipertrofia e volume",
            Goal::Maintain => "Equilíbrio e manutenção",
        }
    }
}

/// A user's body metrics and goal, as coerced from the input form.
///
/// Ephemeral: held only for the duration of one computation, never persisted.
/// Numeric fields are `f64` because the form performs no numeric validation;
/// a malformed entry coerces to NaN and flows through unchanged.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub sex: Sex,
    /// Collected on the form but not used by any computation yet
    pub body_fat_pct: Option<f64>,
    pub goal: Goal,
}

// ============================================================================
// Plan Types
// ============================================================================

/// A complete computed diet plan.
///
/// The four totals are rounded to whole values but kept as `f64` so that the
/// unguarded NaN input path renders as "NaN" instead of collapsing to an
/// integer. Within the valid input domain every value is integral.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    /// Daily calorie target (kcal/day)
    pub calories: f64,
    /// Daily protein target (g)
    pub protein_g: f64,
    /// Daily carbohydrate target (g)
    pub carbs_g: f64,
    /// Daily fat target (g)
    pub fats_g: f64,
    /// Five ordered meal suggestion blocks, breakfast through dinner
    pub meals: Vec<String>,
    /// Advice strings: four general tips followed by four goal-specific ones
    pub tips: Vec<String>,
}
