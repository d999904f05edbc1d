//! # PrognozRS Canned Replies
//!
//! File: bot/src/chat/replies.rs
//! Author: Christi Mahu
//!
//! Fixed texts the bot answers with. The "today's matches" listing is built
//! from the fixture table so it never drifts from what the lookup knows.
//!
use crate::chat::menu::MenuAction;
use crate::engine::fixtures::{self, Discipline};

pub const PONG: &str = "pong";

pub fn greeting() -> String {
    "Привет! Я бот спортивных прогнозов ⚽🎮\nВыбери действие:".to_string()
}

pub fn help() -> String {
    format!(
        "❓ Как пользоваться:\n\
         • Нажми «{today}» — увидишь примеры.\n\
         • Нажми «{ask}» — пришли название матча в формате:\n  \
         Пример: Vitality vs FaZe\n\
         • «{express}» — пример комбинированного прогноза.\n\n\
         Скоро добавим реальные данные и авто-рассылку.",
        today = MenuAction::TodaysMatches.label(),
        ask = MenuAction::AskPrediction.label(),
        express = MenuAction::Express.label(),
    )
}

pub fn todays_matches() -> String {
    let mut text = String::from("📅 Примеры матчей на сегодня (демо):\n");
    for fixture in fixtures::all()
        .iter()
        .filter(|fixture| fixture.discipline == Discipline::Cs2)
    {
        text.push_str("• ");
        text.push_str(fixture.title);
        text.push('\n');
    }
    text.push_str(&format!(
        "Отправь один из этих вариантов через «{}».",
        MenuAction::AskPrediction.label()
    ));
    text
}

pub fn ask_prediction() -> String {
    "Пришли матч в формате: «КомандаA vs КомандаB».\nНапример: Vitality vs FaZe".to_string()
}

/// Answer for text the bot could not make sense of.
pub fn fallback() -> String {
    "Не понял 🤔\nНажми кнопку ниже или пришли матч в формате: «КомандаA vs КомандаB».".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todays_matches_lists_cs2_fixtures_only() {
        let text = todays_matches();
        assert!(text.contains("• Vitality vs FaZe\n"));
        assert!(text.contains("• MOUZ vs FURIA\n"));
        assert!(text.contains("• Team Spirit vs G2\n"));
        assert!(!text.contains("Real Madrid"));
        assert!(text.ends_with("через «📊 Прогноз по матчу»."));
    }

    #[test]
    fn test_help_mentions_every_menu_button_but_help() {
        let text = help();
        assert!(text.contains("«📅 Сегодняшние матчи»"));
        assert!(text.contains("«📊 Прогноз по матчу»"));
        assert!(text.contains("«⚡ Экспрессы»"));
        assert!(text.contains("\n  Пример: Vitality vs FaZe\n"));
    }
}
