//! Configuration types for logtally.
//!
//! [`Config::load`] layers `~/.config/logtally/config.toml` (when present) and
//! an optional explicit file on top of the built-in defaults.
//! [`Config::default`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fields: FieldConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// `[fields]` section: which record keys feed each canonical field.
///
/// List-valued keys are probed in order and the first key present in the
/// record wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldConfig {
    #[serde(default = "default_timestamp_keys")]
    pub timestamp: Vec<String>,
    #[serde(default = "default_level_keys")]
    pub level: Vec<String>,
    #[serde(default = "default_message_keys")]
    pub message: Vec<String>,
    #[serde(default = "default_user_id_key")]
    pub user_id: String,
    #[serde(default = "default_action_key")]
    pub action: String,
    #[serde(default = "default_source_key")]
    pub source: String,
    #[serde(default = "default_duration_key")]
    pub duration_ms: String,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn default_timestamp_keys() -> Vec<String> { keys(&["timestamp", "time", "@timestamp", "ts"]) }
fn default_level_keys() -> Vec<String> { keys(&["level", "lvl", "severity"]) }
fn default_message_keys() -> Vec<String> { keys(&["message", "msg", "log"]) }
fn default_user_id_key() -> String { "user_id".to_string() }
fn default_action_key() -> String { "action".to_string() }
fn default_source_key() -> String { "source".to_string() }
fn default_duration_key() -> String { "duration_ms".to_string() }

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            timestamp: default_timestamp_keys(),
            level: default_level_keys(),
            message: default_message_keys(),
            user_id: default_user_id_key(),
            action: default_action_key(),
            source: default_source_key(),
            duration_ms: default_duration_key(),
        }
    }
}

/// `[metrics]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetricsConfig {
    /// Level spellings counted as errors. Matched exactly, case-sensitively.
    #[serde(default = "default_error_levels")]
    pub error_levels: Vec<String>,
}

fn default_error_levels() -> Vec<String> { keys(&["error", "ERROR"]) }

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            error_levels: default_error_levels(),
        }
    }
}

impl Config {
    /// Load the user config file (if it exists) and then `explicit` (which
    /// must exist when given), layered over the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let user = config_path();
        tracing::debug!(user = %user.display(), ?explicit, "loading config");

        let mut builder = config::Config::builder()
            .add_source(config::File::from(user.as_path()).required(false));
        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Load a single file over the built-in defaults, ignoring the user
    /// config.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("logtally")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
