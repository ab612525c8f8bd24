//! Meal plan composition.
//!
//! Splits the daily targets across five fixed slots and renders the
//! suggestion text for each. Every quantity is a rounded fraction of the
//! per-meal fifth; the per-slot calorie multipliers are display weighting
//! (breakfast 1.0x, morning snack 0.8x, lunch 1.3x, pre-workout 0.7x,
//! dinner 1.2x) and their rounded values do not re-sum to the daily total.
//! Quantities are illustrative, not checked against food composition data.

use crate::targets::MacroTargets;
use crate::types::Goal;

const MEALS_PER_DAY: f64 = 5.0;

/// A rounded fraction of a per-meal amount
fn share(per_meal: f64, factor: f64) -> f64 {
    (per_meal * factor).round()
}

/// Compose the five meal suggestion blocks for a day.
///
/// Slot order is fixed: breakfast, morning snack, lunch, pre-workout snack,
/// dinner. Only the dinner block varies by goal (a cut swaps the starch for
/// a large salad).
pub fn compose_meals(targets: &MacroTargets, goal: Goal) -> Vec<String> {
    let protein_per_meal = (targets.protein_g / MEALS_PER_DAY).round();
    let carbs_per_meal = (targets.carbs_g / MEALS_PER_DAY).round();
    let fats_per_meal = (targets.fats_g / MEALS_PER_DAY).round();
    let calories_per_meal = (targets.calories / MEALS_PER_DAY).round();

    let dinner_carb_line = if goal == Goal::Lose {
        "Salada grande".to_string()
    } else {
        format!("{}g de batata doce", share(carbs_per_meal, 0.8))
    };

    vec![
        format!(
            "🌅 **Café da Manhã** ({} kcal)\n\
             • {}g de aveia\n\
             • 3 ovos mexidos ({}g proteína)\n\
             • 1 banana média\n\
             • {}g de pasta de amendoim",
            calories_per_meal,
            share(protein_per_meal, 0.3),
            share(protein_per_meal, 0.4),
            share(fats_per_meal, 0.2),
        ),
        format!(
            "🥗 **Lanche da Manhã** ({} kcal)\n\
             • 1 scoop de whey protein ({}g)\n\
             • 1 fruta (maçã ou pera)\n\
             • {}g de granola",
            share(calories_per_meal, 0.8),
            share(protein_per_meal, 0.8),
            share(carbs_per_meal, 0.3),
        ),
        format!(
            "🍽️ **Almoço** ({} kcal)\n\
             • {}g de frango/peixe/carne\n\
             • {}g de arroz integral ou batata doce\n\
             • Salada verde à vontade com azeite\n\
             • Legumes cozidos (brócolis, cenoura)",
            share(calories_per_meal, 1.3),
            share(protein_per_meal, 1.5),
            share(carbs_per_meal, 1.2),
        ),
        format!(
            "🥤 **Lanche Pré-Treino** ({} kcal)\n\
             • 1 fatia de pão integral com {}g de pasta de amendoim\n\
             • 1 banana\n\
             • Café preto (opcional)",
            share(calories_per_meal, 0.7),
            share(fats_per_meal, 0.3),
        ),
        format!(
            "🍗 **Jantar** ({} kcal)\n\
             • {}g de frango/peixe\n\
             • {}\n\
             • Legumes grelhados\n\
             • Azeite extra virgem ({}g)",
            share(calories_per_meal, 1.2),
            share(protein_per_meal, 1.3),
            dinner_carb_line,
            share(fats_per_meal, 0.4),
        ),
    ]
}
