//! # PrognozRS Message Router
//!
//! File: bot/src/chat/router.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Decides how to answer a free-text message. The same routing serves the
//! Telegram bot (`prognoz run`) and the console session (`prognoz chat`).
//!
//! Routing order:
//! 1. Menu buttons and their typed aliases.
//! 2. Anything that looks like a match name (`" vs "` or a spaced dash) goes
//!    through the prediction lookup.
//! 3. Everything else gets the fallback prompt with the menu re-attached.
//!
use crate::chat::menu::MenuAction;
use crate::chat::replies;
use crate::engine::card::render_prediction_card;
use crate::engine::express;
use crate::engine::lookup;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static SPACED_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s[-–—]\s").expect("dash pattern is valid"));

/// What to send back for one incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Attach the main-menu keyboard to the reply.
    pub show_menu: bool,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            show_menu: false,
        }
    }

    pub fn with_menu(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            show_menu: true,
        }
    }
}

/// Routes one text message to its reply.
pub fn route(text: &str) -> Reply {
    let normalized = text.trim().to_lowercase();

    if let Some(action) = MenuAction::from_text(&normalized) {
        debug!("Menu action {:?}", action);
        return menu_reply(action);
    }

    if looks_like_match(&normalized) {
        if let Some(prediction) = lookup::predict(&normalized) {
            debug!("Prediction for {:?}: {}", normalized, prediction.title);
            return Reply::plain(render_prediction_card(&prediction));
        }
    }

    debug!("No route for {:?}, sending fallback", normalized);
    Reply::with_menu(replies::fallback())
}

/// Reply for a menu button press.
pub fn menu_reply(action: MenuAction) -> Reply {
    match action {
        MenuAction::TodaysMatches => Reply::plain(replies::todays_matches()),
        MenuAction::AskPrediction => Reply::plain(replies::ask_prediction()),
        MenuAction::Express => match express::render_express(&express::demo_picks()) {
            Some(text) => Reply::plain(text),
            None => Reply::with_menu(replies::fallback()),
        },
        MenuAction::Help => Reply::plain(replies::help()),
    }
}

/// A message is treated as a match name only with a spaced separator, so
/// hyphenated words like "кибер-спорт" do not trigger a lookup.
fn looks_like_match(normalized: &str) -> bool {
    normalized.contains(" vs ") || SPACED_DASH.is_match(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_buttons() {
        assert_eq!(
            route("📅 Сегодняшние матчи"),
            Reply::plain(replies::todays_matches())
        );
        assert_eq!(route("  ПРОГНОЗ "), Reply::plain(replies::ask_prediction()));
        assert_eq!(route("❓ Помощь"), Reply::plain(replies::help()));
    }

    #[test]
    fn test_express_button() {
        let reply = route("⚡ Экспрессы");
        assert!(!reply.show_menu);
        assert!(reply.text.contains("Vitality (78%) × MOUZ (62%) → ~48%"));
    }

    #[test]
    fn test_match_queries_get_cards() {
        let reply = route("Vitality vs FaZe");
        assert!(!reply.show_menu);
        assert!(reply.text.contains("• Vitality → 78%"));

        let reply = route("FaZe vs Vitality");
        assert!(reply.text.contains("• Faze → 22%\n• Vitality → 78%"));

        let reply = route("Alpha — Beta");
        assert!(reply.text.contains("• Alpha → 50%\n• Beta → 50%"));
    }

    #[test]
    fn test_unspaced_dash_is_not_a_query() {
        let reply = route("mouz-furia");
        assert!(reply.show_menu);
        assert_eq!(reply.text, replies::fallback());
    }

    #[test]
    fn test_query_with_empty_side_falls_back() {
        let reply = route("vs vs vs");
        assert!(reply.show_menu);
    }

    #[test]
    fn test_unknown_text_falls_back_with_menu() {
        let reply = route("как дела?");
        assert_eq!(reply, Reply::with_menu(replies::fallback()));
    }
}
