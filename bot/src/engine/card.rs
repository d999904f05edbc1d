//! # PrognozRS Prediction Card
//!
//! File: bot/src/engine/card.rs
//! Author: Christi Mahu
//!
//! Renders a [`Prediction`] as the multi-line text card sent back to users.
//!
use crate::engine::lookup::Prediction;

/// Formats the card for one prediction.
pub fn render_prediction_card(prediction: &Prediction) -> String {
    let a = &prediction.side_a;
    let b = &prediction.side_b;
    format!(
        "🏆 Матч: {title}\n\n\
         📊 Факторы (сводка):\n\
         • Форма, состав, H2H, коэффициенты, психология — по нашей модели\n\n\
         🧮 Итоговый прогноз:\n\
         • {a_name} → {a_prob}%\n\
         • {b_name} → {b_prob}%\n\n\
         ✅ Фаворит: {favorite}\n\
         ℹ️ Примечание: {note}",
        title = prediction.title,
        a_name = a.name,
        a_prob = a.probability,
        b_name = b.name,
        b_prob = b.probability,
        favorite = prediction.favorite().name,
        note = prediction.note,
    )
}
