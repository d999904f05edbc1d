//! # PrognozRS Integration Test Common Helpers
//!
//! File: bot/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `bot/tests/`. Each test file
//! declares `mod common;` and runs the compiled `prognoz` binary through
//! `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// # Get Prognoz Command (`prognoz_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `prognoz` binary, with
/// `BOT_TOKEN` and `RUST_LOG` cleared so the host environment cannot leak
/// into a test.
///
/// ## Panics
/// Panics if the `prognoz` binary cannot be found via `Command::cargo_bin`.
pub fn prognoz_cmd() -> Command {
    let mut cmd = Command::cargo_bin("prognoz").expect("Failed to find prognoz binary for testing");
    cmd.env_remove("BOT_TOKEN").env_remove("RUST_LOG");
    cmd
}
