//! # PrognozRS Express Bets
//!
//! File: bot/src/engine/express.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! An "express" combines several single-match picks into one bet that wins
//! only if every pick wins. Its chance is the product of the individual
//! probabilities, shown as a rounded whole percent.
//!
//! The demo express offered by the menu is assembled from the favourites of
//! two known fixtures, so the numbers always agree with the fixture table.
//!
use crate::engine::fixtures::{self, Fixture};

/// Teams whose fixtures make up the demo express.
const DEMO_TEAMS: [&str; 2] = ["vitality", "mouz"];

/// One leg of an express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub team: String,
    pub probability: u8,
}

impl Pick {
    /// The favourite of a fixture. Ties go to the second team.
    pub fn favorite_of(fixture: &Fixture) -> Self {
        let (name_a, name_b) = fixture.sides();
        if fixture.prob_a > fixture.prob_b {
            Self {
                team: name_a.to_string(),
                probability: fixture.prob_a,
            }
        } else {
            Self {
                team: name_b.to_string(),
                probability: fixture.prob_b,
            }
        }
    }
}

/// Chance, in whole percent, that every pick wins. `None` for an empty slip.
pub fn combined_probability(picks: &[Pick]) -> Option<u8> {
    if picks.is_empty() {
        return None;
    }
    let chance: f64 = picks
        .iter()
        .map(|pick| f64::from(pick.probability) / 100.0)
        .product();
    Some((chance * 100.0).round() as u8)
}

/// Picks of the demo express. Teams missing from the table are skipped.
pub fn demo_picks() -> Vec<Pick> {
    DEMO_TEAMS
        .iter()
        .filter_map(|team| fixtures::find_by_team(team))
        .map(Pick::favorite_of)
        .collect()
}

/// Formats an express slip, e.g. `Vitality (78%) × MOUZ (62%) → ~48% общий шанс`.
pub fn render_express(picks: &[Pick]) -> Option<String> {
    let total = combined_probability(picks)?;
    let legs = picks
        .iter()
        .map(|pick| format!("{} ({}%)", pick.team, pick.probability))
        .collect::<Vec<_>>()
        .join(" × ");
    Some(format!(
        "⚡ Экспресс (пример):\n• {legs} → ~{total}% общий шанс"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(team: &str, probability: u8) -> Pick {
        Pick {
            team: team.to_string(),
            probability,
        }
    }

    #[test]
    fn test_combined_probability() {
        assert_eq!(combined_probability(&[]), None);
        assert_eq!(combined_probability(&[pick("A", 62)]), Some(62));
        assert_eq!(
            combined_probability(&[pick("A", 78), pick("B", 62)]),
            Some(48)
        );
        assert_eq!(
            combined_probability(&[pick("A", 50), pick("B", 50), pick("C", 50)]),
            Some(13)
        );
    }

    #[test]
    fn test_demo_express_matches_table() {
        let picks = demo_picks();
        assert_eq!(picks, vec![pick("Vitality", 78), pick("MOUZ", 62)]);
        assert_eq!(
            render_express(&picks).as_deref(),
            Some("⚡ Экспресс (пример):\n• Vitality (78%) × MOUZ (62%) → ~48% общий шанс")
        );
    }

    #[test]
    fn test_favorite_of_picks_higher_probability() {
        let real = fixtures::find("real madrid", "barcelona").unwrap();
        assert_eq!(Pick::favorite_of(real), pick("Barcelona", 60));
    }
}
