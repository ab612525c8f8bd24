//! Advice strings keyed by goal.
//!
//! Four general tips always come first, followed by four goal-specific ones.
//! The lists are static product copy; nothing here is computed.

use crate::types::Goal;

const BASE_TIPS: [&str; 4] = [
    "💧 Beba pelo menos 3 litros de água por dia",
    "😴 Durma 7-9 horas por noite para recuperação muscular",
    "⏰ Faça refeições a cada 3-4 horas",
    "🏋️ Mantenha consistência nos treinos",
];

const LOSE_TIPS: [&str; 4] = [
    "🔥 Priorize proteínas em todas as refeições para saciedade",
    "🥗 Aumente o consumo de vegetais (baixas calorias, alta saciedade)",
    "🚫 Evite alimentos processados e açúcares refinados",
    "🏃 Adicione 20-30min de cardio 3-4x por semana",
];

const GAIN_TIPS: [&str; 4] = [
    "💪 Foque em exercícios compostos (agachamento, supino, levantamento terra)",
    "🍚 Não pule carboidratos - eles são essenciais para ganho de massa",
    "📊 Aumente gradualmente as calorias se não estiver ganhando peso",
    "⚡ Consuma carboidratos antes e depois do treino",
];

const MAINTAIN_TIPS: [&str; 4] = [
    "⚖️ Monitore seu peso semanalmente",
    "🎯 Ajuste as calorias se começar a ganhar ou perder peso",
    "🥦 Mantenha uma dieta balanceada e variada",
    "💪 Continue treinando regularmente",
];

/// Select the advice list for a goal.
///
/// `body_fat_pct` is accepted but does not alter the output yet; the form
/// collects it and it is threaded through so a future refinement can use it.
pub fn tips_for_goal(goal: Goal, _body_fat_pct: Option<f64>) -> Vec<String> {
    let goal_tips: &[&str] = match goal {
        Goal::Lose => &LOSE_TIPS,
        Goal::Gain => &GAIN_TIPS,
        Goal::Maintain => &MAINTAIN_TIPS,
    };

    BASE_TIPS
        .iter()
        .chain(goal_tips.iter())
        .map(|t| t.to_string())
        .collect()
}
