//! # PrognozRS Prediction Engine
//!
//! File: bot/src/engine/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything that turns text into a prediction, with no knowledge of
//! Telegram or the terminal:
//! - `normalize`: name normalization and title casing
//! - `fixtures`: the immutable table of known match pairings
//! - `lookup`: match-name parsing and the prediction lookup
//! - `card`: rendering a prediction as a text card
//! - `express`: combined probability of several picks
//!
//! All functions here are pure and synchronous, so they are safe to call from
//! any number of concurrent update handlers.
//!
pub mod card;
pub mod express;
pub mod fixtures;
pub mod lookup;
pub mod normalize;
