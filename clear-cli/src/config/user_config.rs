//! User-level configuration for clear
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/clear/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Preferred output format when neither the CLI nor the project sets one
    pub format: Option<String>,

    /// Colored terminal output (default: auto-detect)
    pub color: Option<bool>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/clear/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = UserConfig::default();

        if let Some(user_config) = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(&p).ok())
            .and_then(|content| toml::from_str::<UserConfig>(&content).ok())
        {
            config.merge(user_config);
        }

        if let Ok(format) = std::env::var("CLEAR_FORMAT") {
            if !format.is_empty() {
                config.output.format = Some(format);
            }
        }
        if std::env::var_os("NO_COLOR").is_some() {
            config.output.color = Some(false);
        }

        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("clear").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.output.color.is_some() {
            self.output.color = other.output.color;
        }
    }

    pub fn format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Whether color is explicitly disabled
    pub fn color_disabled(&self) -> bool {
        self.output.color == Some(false)
    }
}
