//! # PrognozRS Bot Runtime Settings
//!
//! File: bot/src/commands/run/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Builds the effective settings for `prognoz run` from:
//! 1. Command-line arguments (highest priority)
//! 2. Configuration files (see `core::config`)
//! 3. Default values (lowest priority)
//!
//! The token is checked first, so a missing or malformed `BOT_TOKEN` fails
//! before any file is read or any request is sent.
//!
//! ## Examples
//!
//! ```bash
//! export BOT_TOKEN=123456:ABC-DEF...
//! prognoz run --timeout 30 --keep-pending
//! ```
//!
use crate::core::config::{self, Config, PollingConfig};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// # Run Command Arguments (`RunArgs`)
///
/// Arguments accepted by `prognoz run`. Polling flags override whatever the
/// configuration files say.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Telegram bot token, in the `<id>:<secret>` form issued by @BotFather.
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Read settings from this file instead of the user/project configuration.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Long-poll timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u32>,

    /// Maximum number of updates fetched per request (1-100).
    #[arg(long)]
    pub limit: Option<u8>,

    /// Process updates that queued up while the bot was offline instead of dropping them.
    #[arg(long)]
    pub keep_pending: bool,
}

/// Effective settings the bot runs with.
#[derive(Clone)]
pub struct BotSettings {
    pub token: String,
    pub polling: PollingConfig,
}

impl fmt::Debug for BotSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotSettings")
            .field("token", &"<redacted>")
            .field("polling", &self.polling)
            .finish()
    }
}

/// Validates the token, loads configuration files and applies CLI overrides.
pub fn load_and_merge_settings(args: RunArgs) -> Result<BotSettings> {
    let token = config::validate_token(args.token.as_deref())?;
    let file_config = config::load_config(args.config.as_deref())?;
    let polling = apply_overrides(file_config.polling, &args);
    config::validate_config(&Config {
        polling: polling.clone(),
    })
    .context("Invalid command-line polling options")?;
    debug!("Effective polling settings: {:?}", polling);
    Ok(BotSettings { token, polling })
}

fn apply_overrides(mut polling: PollingConfig, args: &RunArgs) -> PollingConfig {
    if let Some(timeout) = args.timeout {
        polling.timeout_secs = timeout;
    }
    if let Some(limit) = args.limit {
        polling.limit = limit;
    }
    if args.keep_pending {
        polling.drop_pending_updates = false;
    }
    polling
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(token: Option<&str>) -> RunArgs {
        RunArgs {
            token: token.map(String::from),
            config: None,
            timeout: None,
            limit: None,
            keep_pending: false,
        }
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let file = PollingConfig {
            timeout_secs: 20,
            limit: 40,
            drop_pending_updates: true,
        };
        let cli = RunArgs {
            timeout: Some(5),
            keep_pending: true,
            ..args(Some("1:a"))
        };
        let merged = apply_overrides(file, &cli);
        assert_eq!(merged.timeout_secs, 5);
        assert_eq!(merged.limit, 40);
        assert!(!merged.drop_pending_updates);
    }

    #[test]
    fn test_bad_token_fails_before_config_is_read() {
        let cli = RunArgs {
            config: Some(PathBuf::from("/definitely/not/here.toml")),
            ..args(Some("not-a-token"))
        };
        let err = load_and_merge_settings(cli).unwrap_err();
        assert!(err.to_string().contains("BOT_TOKEN is missing or malformed"));
    }

    #[test]
    fn test_settings_from_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bot.toml");
        fs::write(&path, "[polling]\ntimeout_secs = 15\n").unwrap();

        let cli = RunArgs {
            config: Some(path),
            limit: Some(20),
            ..args(Some("123456:ABC"))
        };
        let settings = load_and_merge_settings(cli).unwrap();
        assert_eq!(settings.token, "123456:ABC");
        assert_eq!(settings.polling.timeout_secs, 15);
        assert_eq!(settings.polling.limit, 20);
        assert!(settings.polling.drop_pending_updates);
    }

    #[test]
    fn test_out_of_range_cli_limit_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bot.toml");
        fs::write(&path, "").unwrap();

        let cli = RunArgs {
            config: Some(path),
            limit: Some(0),
            ..args(Some("123456:ABC"))
        };
        assert!(load_and_merge_settings(cli).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let settings = BotSettings {
            token: "123456:SECRET".into(),
            polling: PollingConfig::default(),
        };
        let shown = format!("{:?}", settings);
        assert!(!shown.contains("SECRET"));
        assert!(shown.contains("<redacted>"));
    }
}
