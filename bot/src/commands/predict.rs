//! # PrognozRS Predict Command
//!
//! File: bot/src/commands/predict.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `prognoz predict` prints the prediction card for one match name, exactly as
//! the bot would send it. Unlike the bot, which answers unreadable text with a
//! help prompt, the command fails so scripts can tell the difference.
//!
//! ## Examples
//!
//! ```bash
//! prognoz predict "Vitality vs FaZe"
//! prognoz predict Team Spirit vs G2
//! ```
//!
use crate::core::error::{PrognozError, Result};
use crate::engine::card::render_prediction_card;
use crate::engine::lookup;
use clap::Parser;
use tracing::debug;

/// # Predict Command Arguments (`PredictArgs`)
#[derive(Parser, Debug)]
pub struct PredictArgs {
    /// Match name such as "Vitality vs FaZe". Separate words are joined with spaces.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub query: Vec<String>,
}

/// Prints the card for the query, or fails with `UnrecognizedQuery`.
pub async fn handle_predict(args: PredictArgs) -> Result<()> {
    let query = args.query.join(" ");
    debug!("Predicting for query {:?}", query);

    let prediction =
        lookup::predict(&query).ok_or_else(|| PrognozError::UnrecognizedQuery {
            query: query.clone(),
        })?;

    println!("{}", render_prediction_card(&prediction));
    Ok(())
}
