//! # PrognozRS Telegram Bot Command
//!
//! File: bot/src/commands/run/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `prognoz run` connects to the Telegram Bot API and answers users until
//! interrupted.
//!
//! ## Architecture
//!
//! - `config.rs`: arguments and effective runtime settings (token, polling)
//! - `bot_logic.rs`: the `teloxide` dispatcher, commands and keyboard
//!
//! ## Examples
//!
//! ```bash
//! BOT_TOKEN=123456:ABC-DEF... prognoz run
//! prognoz -v run --token 123456:ABC-DEF... --config ./bot.toml
//! ```
//!
//! Startup flow:
//! 1. Validate the token and load configuration
//! 2. Register commands and clear any webhook
//! 3. Long-poll for updates until Ctrl-C
//!
use crate::core::error::Result;
use tracing::info;

pub use config::RunArgs;

/// Handles token validation and settings merging for the bot.
pub mod config;

/// Contains the `teloxide` dispatcher and message handlers.
pub mod bot_logic;

/// # Handle Run Command (`handle_run`)
///
/// Entry point for `prognoz run`: resolves settings, then hands them to the
/// dispatcher, which runs until Ctrl-C.
pub async fn handle_run(args: RunArgs) -> Result<()> {
    let settings = config::load_and_merge_settings(args)?;
    info!("Effective bot settings: {:?}", settings);

    bot_logic::run_bot(settings).await
}
