//! Configuration module for CLEAR
//!
//! This module handles:
//! - Project-level configuration (clear.toml)
//! - Custom dimension tables and benchmarks
//! - Scoring policy
//! - CLI defaults and user preferences

mod project_config;
mod user_config;

pub use project_config::{
    load_project_config, CliDefaults, ProjectConfig, ScoringConfig, JSON_CONFIG_FILE,
    TOML_CONFIG_FILE,
};
pub use user_config::{OutputConfig, UserConfig};
