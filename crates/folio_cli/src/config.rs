//! Folio configuration file handling
//!
//! `folio.toml` holds the portfolio content under `[portfolio]` and optional
//! animation/form timing overrides under `[timings]`.

use anyhow::{Context, Result};
use folio_animation::{CursorMode, TypewriterConfig};
use folio_core::{FormTimings, Portfolio};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default config file name looked up in the working directory
pub const CONFIG_FILE: &str = "folio.toml";

/// Top-level configuration stored in folio.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct FolioConfig {
    pub portfolio: Portfolio,
    #[serde(default)]
    pub timings: TimingsConfig,
}

/// Timing overrides; anything unset keeps the preset value
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimingsConfig {
    /// Cursor blink toggle interval
    #[serde(default = "default_cursor_blink_ms")]
    pub cursor_blink_ms: u64,
    /// Simulated submission round-trip
    #[serde(default = "default_submission_latency_ms")]
    pub submission_latency_ms: u64,
    /// How long the success/error notice stays up
    #[serde(default = "default_status_hold_ms")]
    pub status_hold_ms: u64,
    #[serde(default)]
    pub hero_name: TypewriterOverrides,
    #[serde(default)]
    pub hero_tagline: TypewriterOverrides,
    #[serde(default)]
    pub skills_rotator: TypewriterOverrides,
}

fn default_cursor_blink_ms() -> u64 {
    500
}

fn default_submission_latency_ms() -> u64 {
    1500
}

fn default_status_hold_ms() -> u64 {
    3000
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            cursor_blink_ms: default_cursor_blink_ms(),
            submission_latency_ms: default_submission_latency_ms(),
            status_hold_ms: default_status_hold_ms(),
            hero_name: TypewriterOverrides::default(),
            hero_tagline: TypewriterOverrides::default(),
            skills_rotator: TypewriterOverrides::default(),
        }
    }
}

impl TimingsConfig {
    pub fn form_timings(&self) -> FormTimings {
        FormTimings {
            submission_latency: Duration::from_millis(self.submission_latency_ms),
            status_hold: Duration::from_millis(self.status_hold_ms),
        }
    }

    pub fn cursor_blink(&self) -> Duration {
        Duration::from_millis(self.cursor_blink_ms)
    }
}

/// Per-typewriter overrides
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TypewriterOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_interval_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_interval_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorMode>,
}

impl TypewriterOverrides {
    /// Apply the set overrides on top of a preset
    pub fn apply(&self, mut config: TypewriterConfig) -> TypewriterConfig {
        if let Some(ms) = self.type_interval_ms {
            config = config.type_interval(Duration::from_millis(ms));
        }
        if let Some(ms) = self.delete_interval_ms {
            config = config.delete_interval(Duration::from_millis(ms));
        }
        if let Some(ms) = self.hold_ms {
            config = config.hold(Duration::from_millis(ms));
        }
        if let Some(cursor) = self.cursor {
            config = config.cursor(cursor);
        }
        config
    }
}

impl FolioConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "No config found at {}. Run `folio init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load an explicit path, else ./folio.toml if present, else sample content
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.exists() {
                    Self::load(local)
                } else {
                    tracing::info!("No {} found, using sample content", CONFIG_FILE);
                    Ok(Self::sample())
                }
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: FolioConfig = toml::from_str(content)?;
        config.portfolio.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn sample() -> Self {
        Self {
            portfolio: Portfolio::sample(),
            timings: TimingsConfig::default(),
        }
    }
}
