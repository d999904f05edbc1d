//! # PrognozRS Core Infrastructure
//!
//! File: bot/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: Configuration loading, merging, and validation (plus bot token checks)
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{PrognozError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
