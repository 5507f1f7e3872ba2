// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration (`courier.toml`)
//!
//! Every section is optional; a project without a config file runs on the
//! defaults below.

mod bridge;

pub use bridge::{BridgeConfig, BridgeKind, DEFAULT_BRIDGE_URL};

use crate::classify::{Classifier, DEFAULT_EQUIPMENT_KEYWORDS, DEFAULT_SKIP_NAMES};
use crate::night::NightWindow;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILE: &str = "courier.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),
    #[error("failed to parse {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Time between timer-driven scans
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    /// Timer resolution; the countdown moves once per tick
    #[serde(with = "humantime_serde")]
    pub tick: Duration,
    /// Run one scan right after startup instead of waiting a full interval
    pub on_startup: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            tick: Duration::from_secs(1),
            on_startup: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CooldownConfig {
    #[serde(with = "humantime_serde")]
    pub window: Duration,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(120),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NightConfig {
    pub pause: bool,
    pub start_hour: f64,
    pub end_hour: f64,
}

impl Default for NightConfig {
    fn default() -> Self {
        let window = NightWindow::default();
        Self {
            pause: true,
            start_hour: window.start_hour,
            end_hour: window.end_hour,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayKind {
    /// Redraws stdout; only useful for a daemon run in the foreground
    Terminal,
    #[default]
    Log,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub kind: DisplayKind,
    /// Rows available for the report; 0 means unlimited, otherwise at
    /// least 2 for the title and footer
    pub rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            kind: DisplayKind::Log,
            rows: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    pub equipment_keywords: Vec<String>,
    pub skip_names: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            equipment_keywords: DEFAULT_EQUIPMENT_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skip_names: DEFAULT_SKIP_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CourierConfig {
    pub scan: ScanConfig,
    pub cooldown: CooldownConfig,
    pub night: NightConfig,
    pub display: DisplayConfig,
    pub classifier: ClassifierConfig,
    pub bridge: BridgeConfig,
}

impl CourierConfig {
    /// Load `courier.toml` from a project root, falling back to defaults
    pub fn for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let path = project_root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse(_, source) => ConfigError::Parse(path.to_path_buf(), source),
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.tick.is_zero() {
            return Err(ConfigError::Invalid("scan.tick must be non-zero".into()));
        }
        if self.scan.interval < self.scan.tick {
            return Err(ConfigError::Invalid(
                "scan.interval must be at least one tick".into(),
            ));
        }
        for (name, hour) in [
            ("night.start_hour", self.night.start_hour),
            ("night.end_hour", self.night.end_hour),
        ] {
            if !(0.0..24.0).contains(&hour) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be within [0, 24), got {}",
                    name, hour
                )));
            }
        }
        if self.display.rows == 1 {
            return Err(ConfigError::Invalid(
                "display.rows must be 0 (unlimited) or at least 2".into(),
            ));
        }
        if self.bridge.kind == BridgeKind::Http && self.bridge.url.is_empty() {
            return Err(ConfigError::Invalid("bridge.url must be set".into()));
        }
        Ok(())
    }

    /// Number of ticks between timer-driven scans, rounded up
    pub fn interval_ticks(&self) -> u32 {
        let tick = self.scan.tick.as_millis().max(1);
        let ticks = self.scan.interval.as_millis().div_ceil(tick);
        u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(
            self.classifier.equipment_keywords.iter().cloned(),
            self.classifier.skip_names.iter().cloned(),
        )
    }

    pub fn night_window(&self) -> NightWindow {
        NightWindow::new(self.night.start_hour, self.night.end_hour)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
