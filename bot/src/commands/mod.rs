//! # PrognozRS Command Modules
//!
//! File: bot/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates all top-level commands of the `prognoz` binary.
//! Each command defines its own arguments structure and an async handler.
//!
//! ## Commands
//!
//! - `run`: Connect to Telegram and serve users
//! - `predict`: Print the prediction card for one match name
//! - `fixtures`: List the known fixtures
//! - `chat`: Talk to the bot in the terminal
//!

/// Console conversation through the same router the bot uses.
pub mod chat;
/// Listing of the compiled-in fixture table.
pub mod fixtures;
/// One-shot prediction lookup from the command line.
pub mod predict;
/// The Telegram bot itself: settings, dispatcher and handlers.
pub mod run;
