//! # PrognozRS Conversation Layer
//!
//! File: bot/src/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps incoming chat text to replies without touching the network:
//! - `menu`: main-menu buttons and their aliases
//! - `replies`: canned reply texts
//! - `router`: the routing decision for a single message
//!
//! The Telegram adapter (`commands::run`) and the console session
//! (`commands::chat`) both sit on top of `router::route`.
//!
pub mod menu;
pub mod replies;
pub mod router;
