//! # PrognozRS Fixtures Command
//!
//! File: bot/src/commands/fixtures.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `prognoz fixtures` lists every match the bot has precomputed numbers for.
//!
//! Example output:
//!
//! ```text
//! Known fixtures:
//!
//! Match                    | Odds    | Discipline
//! -------------------------+---------+-----------
//! Vitality vs FaZe         | 78 / 22 | CS2
//! MOUZ vs FURIA            | 62 / 38 | CS2
//! Team Spirit vs G2        | 75 / 25 | CS2
//! Real Madrid vs Barcelona | 40 / 60 | Football
//!
//! Found 4 fixture(s).
//! ```
//!
use crate::core::error::Result;
use crate::engine::fixtures::{self, Fixture};
use clap::Parser;

/// # Fixtures Command Arguments (`FixturesArgs`)
#[derive(Parser, Debug)]
pub struct FixturesArgs {
    /// Also print the commentary note under each match.
    #[arg(long)]
    pub notes: bool,
}

pub async fn handle_fixtures(args: FixturesArgs) -> Result<()> {
    print!("{}", format_table(fixtures::all(), args.notes));
    Ok(())
}

fn format_table(fixtures: &[Fixture], with_notes: bool) -> String {
    let title_width = fixtures
        .iter()
        .map(|fixture| fixture.title.chars().count())
        .chain(std::iter::once("Match".len()))
        .max()
        .unwrap_or(5);

    let mut out = String::from("Known fixtures:\n\n");
    out.push_str(&format!(
        "{:<width$} | Odds    | Discipline\n",
        "Match",
        width = title_width
    ));
    out.push_str(&format!(
        "{:-<width$}-+---------+-----------\n",
        "",
        width = title_width
    ));
    for fixture in fixtures {
        let odds = format!("{} / {}", fixture.prob_a, fixture.prob_b);
        out.push_str(&format!(
            "{:<width$} | {:<7} | {}\n",
            fixture.title,
            odds,
            fixture.discipline,
            width = title_width
        ));
        if with_notes {
            out.push_str(&format!("    {}\n", fixture.note));
        }
    }
    out.push_str(&format!("\nFound {} fixture(s).\n", fixtures.len()));
    out
}
