//! # PrognozRS Prediction Lookup
//!
//! File: bot/src/engine/lookup.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a free-text match name into a [`Prediction`]:
//!
//! 1. Split the text on the first "vs" (whole word, any case) or dash
//!    (`-`, `–`, `—`) into two name candidates.
//! 2. Normalize both candidates.
//! 3. Look the ordered pair up in the fixture table; on a miss try the
//!    reversed pair and swap the sides back into the user's order.
//! 4. If neither ordering is known, return an even 50/50 placeholder.
//!
//! Text that does not split into two non-empty names yields `None`. The lookup
//! is pure and never fails otherwise; callers decide what to show for `None`.
//!
//! ```rust
//! let p = predict("FaZe vs Vitality").unwrap();
//! assert_eq!((p.side_a.probability, p.side_b.probability), (22, 78));
//! ```
//!
use crate::engine::fixtures::{self, Fixture};
use crate::engine::normalize::{normalize_name, title_case};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Note attached to predictions for pairs the table does not know.
pub const PLACEHOLDER_NOTE: &str =
    "Пока без данных: нужен сбор статистики и коэффициентов. Это заглушка до подключения API.";

/// Probability given to each side of an unknown pair.
pub const NEUTRAL_PROBABILITY: u8 = 50;

static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bvs\b|–|-|—").expect("separator pattern is valid"));

/// One team in a prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    pub name: String,
    pub probability: u8,
}

/// A prediction for one match, with sides in the order the user named them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub title: String,
    pub side_a: Side,
    pub side_b: Side,
    pub note: &'static str,
}

impl Prediction {
    /// The side with the higher probability. Ties go to `side_b`.
    pub fn favorite(&self) -> &Side {
        if self.side_a.probability > self.side_b.probability {
            &self.side_a
        } else {
            &self.side_b
        }
    }

    fn from_fixture(fixture: &Fixture) -> Self {
        let (name_a, name_b) = fixture.sides();
        Self {
            title: fixture.title.to_string(),
            side_a: Side {
                name: name_a.to_string(),
                probability: fixture.prob_a,
            },
            side_b: Side {
                name: name_b.to_string(),
                probability: fixture.prob_b,
            },
            note: fixture.note,
        }
    }

    /// Names come from the user's input, title-cased; only the numbers and
    /// the note come from the stored fixture.
    fn from_reversed_fixture(fixture: &Fixture, key_a: &str, key_b: &str) -> Self {
        let name_a = title_case(key_a);
        let name_b = title_case(key_b);
        Self {
            title: format!("{name_a} vs {name_b}"),
            side_a: Side {
                name: name_a,
                probability: fixture.prob_b,
            },
            side_b: Side {
                name: name_b,
                probability: fixture.prob_a,
            },
            note: fixture.note,
        }
    }

    fn neutral(key_a: &str, key_b: &str) -> Self {
        let name_a = title_case(key_a);
        let name_b = title_case(key_b);
        Self {
            title: format!("{name_a} vs {name_b}"),
            side_a: Side {
                name: name_a,
                probability: NEUTRAL_PROBABILITY,
            },
            side_b: Side {
                name: name_b,
                probability: NEUTRAL_PROBABILITY,
            },
            note: PLACEHOLDER_NOTE,
        }
    }
}

/// Splits `text` into two normalized name candidates.
///
/// Returns `None` when no separator is present. Text after a second separator
/// is ignored. Either candidate may be empty (`"vs Beta"`); [`predict`]
/// rejects that case.
pub fn parse_match_name(text: &str) -> Option<(String, String)> {
    let mut parts = SEPARATOR.split(text);
    let first = parts.next()?;
    let second = parts.next()?;
    Some((normalize_name(first), normalize_name(second)))
}

/// Looks up a prediction for a free-text match name.
pub fn predict(query: &str) -> Option<Prediction> {
    let (key_a, key_b) = parse_match_name(query)?;
    if key_a.is_empty() || key_b.is_empty() {
        trace!("Query {:?} has an empty team name", query);
        return None;
    }

    if let Some(fixture) = fixtures::find(&key_a, &key_b) {
        trace!("Fixture hit for ({}, {})", key_a, key_b);
        return Some(Prediction::from_fixture(fixture));
    }
    if let Some(fixture) = fixtures::find(&key_b, &key_a) {
        trace!("Reversed fixture hit for ({}, {})", key_a, key_b);
        return Some(Prediction::from_reversed_fixture(fixture, &key_a, &key_b));
    }

    trace!("No fixture for ({}, {}), using neutral estimate", key_a, key_b);
    Some(Prediction::neutral(&key_a, &key_b))
}
