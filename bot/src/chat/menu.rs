//! # PrognozRS Main Menu
//!
//! File: bot/src/chat/menu.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The reply-keyboard menu shown under the chat. Pressing a button makes the
//! client send the button label as an ordinary text message, so each action
//! is recognised by its label and a couple of shorter typed aliases.
//!
//! Aliases are stored lowercase and compared against lowercased, trimmed text.
//!

/// An action reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    TodaysMatches,
    AskPrediction,
    Express,
    Help,
}

impl MenuAction {
    /// Menu actions in keyboard order, top to bottom.
    pub const ALL: [MenuAction; 4] = [
        MenuAction::TodaysMatches,
        MenuAction::AskPrediction,
        MenuAction::Express,
        MenuAction::Help,
    ];

    /// Button label as displayed on the keyboard.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::TodaysMatches => "📅 Сегодняшние матчи",
            MenuAction::AskPrediction => "📊 Прогноз по матчу",
            MenuAction::Express => "⚡ Экспрессы",
            MenuAction::Help => "❓ Помощь",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            MenuAction::TodaysMatches => {
                &["📅 сегодняшние матчи", "сегодняшние матчи", "сегодняшние"]
            }
            MenuAction::AskPrediction => &["📊 прогноз по матчу", "прогноз по матчу", "прогноз"],
            MenuAction::Express => &["⚡ экспрессы", "экспрессы", "экспресс"],
            MenuAction::Help => &["❓ помощь", "помощь", "/help"],
        }
    }

    /// Matches already lowercased and trimmed text against every alias.
    pub fn from_text(normalized: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.aliases().contains(&normalized))
    }
}

/// Keyboard layout: one button per row.
pub fn keyboard_rows() -> Vec<Vec<&'static str>> {
    MenuAction::ALL
        .iter()
        .map(|action| vec![action.label()])
        .collect()
}
