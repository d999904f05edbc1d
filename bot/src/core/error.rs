//! # PrognozRS Error Types
//!
//! File: bot/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout PrognozRS.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PrognozError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The prediction lookup itself never fails; an unrecognised query is a
//! `None`, which only the offline `predict` command turns into
//! `PrognozError::UnrecognizedQuery`.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !token.contains(':') {
//!     return Err(PrognozError::InvalidToken)?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for PrognozRS.
#[derive(Error, Debug)]
pub enum PrognozError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("BOT_TOKEN is missing or malformed. Example: export BOT_TOKEN=123456:ABC-DEF...")]
    InvalidToken,

    #[error("Could not read a match from '{query}'. Expected format: 'TeamA vs TeamB'.")]
    UnrecognizedQuery { query: String },

    #[error("Telegram request failed: {source}")]
    Telegram {
        #[from]
        source: teloxide::RequestError,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
