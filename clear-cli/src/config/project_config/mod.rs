//! Project-level configuration support
//!
//! Loads configuration from `clear.toml` or `.clearrc.json` in the given
//! directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # clear.toml
//!
//! [scoring]
//! require_integer_scores = true
//! weight_tolerance = 0.001
//!
//! [[dimensions]]
//! id = "timeRequired"
//! label = "Time Required"
//! weight = 0.6
//!
//! [[dimensions]]
//! id = "cost"
//! label = "Cost"
//! weight = 0.4
//!
//! [[benchmarks]]
//! name = "Passport Renewal"
//! score = 6.4
//!
//! [defaults]
//! format = "json"
//! benchmarks = ["Passport Renewal"]
//! ```

use crate::models::Benchmark;
use crate::models::Dimension;
use crate::scoring::{
    DimensionTable, ScoringError, ScoringResult, ScoringSession, DEFAULT_WEIGHT_TOLERANCE,
};
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

pub const TOML_CONFIG_FILE: &str = "clear.toml";
pub const JSON_CONFIG_FILE: &str = ".clearrc.json";

/// Project-level configuration loaded from clear.toml or .clearrc.json
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Scoring policy
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Custom dimension table (empty = shipped table)
    #[serde(default)]
    pub dimensions: Vec<Dimension>,

    /// Reference scores for named processes
    #[serde(default)]
    pub benchmarks: Vec<Benchmark>,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Scoring policy
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Reject fractional ratings such as 2.5 (default: false)
    #[serde(default)]
    pub require_integer_scores: bool,

    /// Allowed deviation of the weight sum from 1.0 (default: 0.001)
    #[serde(default = "default_weight_tolerance")]
    pub weight_tolerance: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            require_integer_scores: false,
            weight_tolerance: default_weight_tolerance(),
        }
    }
}

fn default_weight_tolerance() -> f64 {
    DEFAULT_WEIGHT_TOLERANCE
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Benchmarks to compare against on every `score` run
    #[serde(default)]
    pub benchmarks: Vec<String>,

    /// Print the scoring breakdown by default
    #[serde(default)]
    pub explain: Option<bool>,
}

/// Load project configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `clear.toml`
/// 2. `.clearrc.json`
///
/// Returns default configuration if no config file is found. A file that
/// exists but cannot be read or parsed is an error.
pub fn load_project_config(dir: &Path) -> anyhow::Result<ProjectConfig> {
    let toml_path = dir.join(TOML_CONFIG_FILE);
    if toml_path.exists() {
        let config = load_toml_config(&toml_path)
            .with_context(|| format!("Failed to load {}", toml_path.display()))?;
        debug!("Loaded project config from {}", toml_path.display());
        return Ok(config);
    }

    let json_path = dir.join(JSON_CONFIG_FILE);
    if json_path.exists() {
        let config = load_json_config(&json_path)
            .with_context(|| format!("Failed to load {}", json_path.display()))?;
        debug!("Loaded project config from {}", json_path.display());
        return Ok(config);
    }

    debug!("No project config found, using defaults");
    Ok(ProjectConfig::default())
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

impl ProjectConfig {
    /// The active dimension table, validated.
    ///
    /// Falls back to the shipped table when none is configured. A configured
    /// table that fails validation is an error, never silently replaced.
    pub fn dimension_table(&self) -> ScoringResult<DimensionTable> {
        if self.dimensions.is_empty() {
            return Ok(DimensionTable::default());
        }
        debug!("Using {} configured dimensions", self.dimensions.len());
        DimensionTable::with_tolerance(self.dimensions.clone(), self.scoring.weight_tolerance)
    }

    /// A fresh scoring session over the active table
    pub fn session(&self) -> ScoringResult<ScoringSession> {
        Ok(ScoringSession::new(
            self.dimension_table()?,
            self.scoring.clone(),
        ))
    }

    /// Look up a benchmark by name (case-insensitive)
    pub fn benchmark(&self, name: &str) -> ScoringResult<&Benchmark> {
        self.benchmarks
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ScoringError::UnknownBenchmark(name.to_string()))
    }

    /// Resolve a list of benchmark names, keeping their order
    pub fn resolve_benchmarks(&self, names: &[String]) -> ScoringResult<Vec<Benchmark>> {
        names
            .iter()
            .map(|name| self.benchmark(name).cloned())
            .collect()
    }

    /// Check everything that can be checked without scoring anything
    pub fn validate(&self) -> ScoringResult<()> {
        self.dimension_table()?;

        let mut seen = HashSet::new();
        for benchmark in &self.benchmarks {
            if !benchmark.score.is_finite() {
                return Err(ScoringError::InvalidBenchmark(format!(
                    "'{}' has a non-numeric score",
                    benchmark.name
                )));
            }
            if !seen.insert(benchmark.name.to_lowercase()) {
                warn!("Benchmark '{}' is defined more than once", benchmark.name);
            }
        }
        Ok(())
    }
}
