//! # PrognozRS Configuration System
//!
//! File: bot/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for PrognozRS, handling
//! loading, merging and validation of the settings that shape how the bot talks
//! to Telegram. It also validates the bot token, which is never stored in a
//! configuration file.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `prognoz run --config <PATH>` (used alone)
//! 2. Project-specific `.prognoz.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/prognoz/config.toml`)
//! 4. Default values defined in the code
//!
//! Project settings override user settings field by field. Command-line flags
//! on `prognoz run` override the result (see `commands::run::config`).
//!
//! ## Examples
//!
//! ```toml
//! [polling]
//! timeout_secs = 10
//! limit = 100
//! drop_pending_updates = true
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let timeout = cfg.polling.timeout_secs;
//! ```
//!
use crate::core::error::{PrognozError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Largest long-poll timeout accepted, in seconds.
pub const MAX_TIMEOUT_SECS: u32 = 50;
/// Largest batch Telegram returns from one `getUpdates` call.
pub const MAX_LIMIT: u8 = 100;

/// The resolved configuration, every field filled in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub polling: PollingConfig,
}

/// Long-polling settings for `prognoz run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollingConfig {
    /// How long Telegram may hold a `getUpdates` request open.
    pub timeout_secs: u32,
    /// Maximum number of updates fetched per request.
    pub limit: u8,
    /// Skip updates that queued up while the bot was offline.
    pub drop_pending_updates: bool,
}

impl Default for PollingConfig {
    fn default() -> Self {
        ConfigFile::default().resolve().polling
    }
}

/// One configuration file as written. A field left out of the file stays
/// `None`, so it can fall through to the next file instead of to a default.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    polling: PollingFile,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PollingFile {
    #[serde(default)]
    timeout_secs: Option<u32>,
    #[serde(default)]
    limit: Option<u8>,
    #[serde(default)]
    drop_pending_updates: Option<bool>,
}

impl ConfigFile {
    /// Fields set in `self` win; the rest come from `fallback`.
    fn or(self, fallback: ConfigFile) -> ConfigFile {
        ConfigFile {
            polling: PollingFile {
                timeout_secs: self.polling.timeout_secs.or(fallback.polling.timeout_secs),
                limit: self.polling.limit.or(fallback.polling.limit),
                drop_pending_updates: self
                    .polling
                    .drop_pending_updates
                    .or(fallback.polling.drop_pending_updates),
            },
        }
    }

    fn resolve(self) -> Config {
        let polling = self.polling;
        Config {
            polling: PollingConfig {
                timeout_secs: polling.timeout_secs.unwrap_or_else(default_timeout_secs),
                limit: polling.limit.unwrap_or_else(default_limit),
                drop_pending_updates: polling
                    .drop_pending_updates
                    .unwrap_or_else(default_drop_pending_updates),
            },
        }
    }
}

fn default_timeout_secs() -> u32 {
    10
}
fn default_limit() -> u8 {
    MAX_LIMIT
}
fn default_drop_pending_updates() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".prognoz.toml";

/// Loads, merges and validates the configuration.
///
/// With `explicit` set, only that file is read and it must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?.resolve()
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir =
                std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Prognoz", "prognoz") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<ConfigFile>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.prognoz.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.prognoz.toml`, stopping at the first
/// directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project settings override user settings field by field; anything neither
/// file sets takes its default.
fn merge_configs(user: ConfigFile, project: Option<ConfigFile>) -> Config {
    match project {
        Some(project) => project.or(user).resolve(),
        None => user.resolve(),
    }
}

/// Checks value ranges the Bot API would otherwise reject at runtime.
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.polling.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(anyhow!(PrognozError::Config(format!(
            "polling.timeout_secs must be at most {}, got {}.",
            MAX_TIMEOUT_SECS, config.polling.timeout_secs
        ))));
    }
    if config.polling.limit == 0 || config.polling.limit > MAX_LIMIT {
        return Err(anyhow!(PrognozError::Config(format!(
            "polling.limit must be between 1 and {}, got {}.",
            MAX_LIMIT, config.polling.limit
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}

/// Accepts a bot token only if it is non-empty and has the `<id>:<secret>` shape.
pub fn validate_token(token: Option<&str>) -> Result<String> {
    match token.map(str::trim) {
        Some(token) if !token.is_empty() && token.contains(':') => Ok(token.to_string()),
        _ => Err(anyhow!(PrognozError::InvalidToken)),
    }
}
