//! # PrognozRS Fixture Table
//!
//! File: bot/src/engine/fixtures.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The compiled-in table of known match pairings. Each record holds the two
//! normalized team keys, a display title, precomputed win probabilities and a
//! short commentary note.
//!
//! The table is immutable. [`find`] answers lookups through a map built once,
//! on first access; [`all`] exposes the records in declaration order for
//! listings ("today's matches", `prognoz fixtures`).
//!
//! Probabilities add up to 100 for every record, but that is a property of the
//! data below rather than something checked at runtime.
//!
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Sport a fixture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    Cs2,
    Football,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Cs2 => write!(f, "CS2"),
            Discipline::Football => write!(f, "Football"),
        }
    }
}

/// A known match pairing with precomputed probabilities and commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    /// Normalized key of the first team.
    pub key_a: &'static str,
    /// Normalized key of the second team.
    pub key_b: &'static str,
    /// Display title, always `"<A> vs <B>"`.
    pub title: &'static str,
    pub prob_a: u8,
    pub prob_b: u8,
    pub note: &'static str,
    pub discipline: Discipline,
}

impl Fixture {
    /// Splits the display title into its two team names.
    pub fn sides(&self) -> (&'static str, &'static str) {
        self.title.split_once(" vs ").unwrap_or((self.title, ""))
    }
}

static KNOWN_FIXTURES: &[Fixture] = &[
    Fixture {
        key_a: "vitality",
        key_b: "faze",
        title: "Vitality vs FaZe",
        prob_a: 78,
        prob_b: 22,
        note: "Состав и форма у Vitality сильнее; рынок на их стороне.",
        discipline: Discipline::Cs2,
    },
    Fixture {
        key_a: "mouz",
        key_b: "furia",
        title: "MOUZ vs FURIA",
        prob_a: 62,
        prob_b: 38,
        note: "MOUZ сильнее по форме, H2H и по рынку.",
        discipline: Discipline::Cs2,
    },
    Fixture {
        key_a: "team spirit",
        key_b: "g2",
        title: "Team Spirit vs G2",
        prob_a: 75,
        prob_b: 25,
        note: "Spirit на серии, сильный костяк; G2 нестабильнее.",
        discipline: Discipline::Cs2,
    },
    Fixture {
        key_a: "real madrid",
        key_b: "barcelona",
        title: "Real Madrid vs Barcelona",
        prob_a: 40,
        prob_b: 60,
        note: "Форма Барсы выше (пример).",
        discipline: Discipline::Football,
    },
];

/// `key_a -> key_b -> fixture`, so lookups can borrow the caller's keys.
type FixtureIndex = HashMap<&'static str, HashMap<&'static str, &'static Fixture>>;

static FIXTURE_INDEX: Lazy<FixtureIndex> = Lazy::new(|| {
    let mut index = FixtureIndex::new();
    for fixture in KNOWN_FIXTURES {
        index
            .entry(fixture.key_a)
            .or_default()
            .insert(fixture.key_b, fixture);
    }
    index
});

/// Every known fixture, in declaration order.
pub fn all() -> &'static [Fixture] {
    KNOWN_FIXTURES
}

/// Looks up the ordered pair `(key_a, key_b)`. Keys must already be normalized.
pub fn find(key_a: &str, key_b: &str) -> Option<&'static Fixture> {
    FIXTURE_INDEX
        .get(key_a)
        .and_then(|by_key_b| by_key_b.get(key_b))
        .copied()
}

/// Finds the fixture whose pair contains `key` on either side.
pub fn find_by_team(key: &str) -> Option<&'static Fixture> {
    KNOWN_FIXTURES
        .iter()
        .find(|fixture| fixture.key_a == key || fixture.key_b == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize::normalize_name;

    #[test]
    fn test_find_is_order_sensitive() {
        let fixture = find("vitality", "faze").expect("vitality/faze is a known fixture");
        assert_eq!(fixture.prob_a, 78);
        assert_eq!(fixture.prob_b, 22);
        assert!(find("faze", "vitality").is_none());
    }

    #[test]
    fn test_every_fixture_is_found_by_its_keys() {
        for fixture in all() {
            let found = find(fixture.key_a, fixture.key_b).expect("fixture is indexed");
            assert_eq!(found.title, fixture.title);
        }
        assert!(find("vitality", "mouz").is_none());
        assert!(find("", "").is_none());
    }

    #[test]
    fn test_keys_are_normalized() {
        for fixture in all() {
            assert_eq!(normalize_name(fixture.key_a), fixture.key_a);
            assert_eq!(normalize_name(fixture.key_b), fixture.key_b);
        }
    }

    #[test]
    fn test_table_data_is_consistent() {
        for fixture in all() {
            assert_eq!(
                u16::from(fixture.prob_a) + u16::from(fixture.prob_b),
                100,
                "{} does not add up to 100",
                fixture.title
            );
            let (a, b) = fixture.sides();
            assert_eq!(normalize_name(a), fixture.key_a);
            assert_eq!(normalize_name(b), fixture.key_b);
        }
    }

    #[test]
    fn test_find_by_team_checks_both_sides() {
        assert_eq!(find_by_team("mouz").map(|f| f.title), Some("MOUZ vs FURIA"));
        assert_eq!(find_by_team("g2").map(|f| f.title), Some("Team Spirit vs G2"));
        assert!(find_by_team("navi").is_none());
    }
}
