//! CLI command definitions and handlers

mod catalog;
mod classify;
mod init;
mod score;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clear::config::{load_project_config, ProjectConfig, UserConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parse a `dimension=value` assignment
fn parse_assignment(s: &str) -> Result<(String, f64), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("'{}' is not of the form dimension=value", s))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("'{}' is missing a dimension name", s));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", value.trim()))?;
    Ok((id.to_string(), value))
}

/// CLEAR - how hard is this government process?
#[derive(Parser, Debug)]
#[command(name = "clear")]
#[command(
    version,
    about = "Score the complexity of government processes from weighted 1-10 dimension ratings",
    after_help = "\
Examples:
  clear score --set stepCount=3 --set timeRequired=5 --set cost=2
  clear score --scores renewal.json --benchmark \"Passport Renewal\"
  clear score --scores renewal.json --format json
  clear classify 6.4
  clear dimensions
  clear init"
)]
pub struct Cli {
    /// Directory holding clear.toml (default: current directory)
    #[arg(long, short = 'C', global = true, default_value = ".")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter clear.toml with the default dimensions
    Init {
        /// Overwrite an existing clear.toml
        #[arg(long)]
        force: bool,
    },

    /// Score a process from dimension ratings
    #[command(after_help = "\
Ratings are whole or fractional numbers from 1 (simple) to 10 (very hard).
Ratings given with --set are applied after those in --scores; a later
rating for the same dimension replaces the earlier one.

Examples:
  clear score --set stepCount=3 --set cost=2
  clear score --scores ratings.json --set cost=4
  clear score --scores ratings.json --all-benchmarks --format markdown -o report.md
  clear score --scores ratings.json --explain")]
    Score {
        /// JSON or TOML file mapping dimension ids to ratings
        #[arg(long, short = 's')]
        scores: Option<PathBuf>,

        /// Rate one dimension (repeatable): dimension=value
        #[arg(long = "set", value_name = "DIMENSION=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, f64)>,

        /// Compare against a configured benchmark (repeatable)
        #[arg(long = "benchmark", short = 'b', value_name = "NAME")]
        benchmarks: Vec<String>,

        /// Compare against every configured benchmark
        #[arg(long, conflicts_with = "benchmarks")]
        all_benchmarks: bool,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (a directory gets clear-score.<ext>)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Explain the scoring formula with a per-dimension breakdown
        #[arg(long)]
        explain: bool,
    },

    /// Classify a fixed score (e.g. a published benchmark)
    Classify {
        /// The score to classify
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the active dimension table
    Dimensions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List configured benchmarks with their severity bands
    Benchmarks {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let user = UserConfig::load().context("Failed to load user config")?;
    if cli.no_color || user.color_disabled() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match cli.command {
        Commands::Init { force } => init::run(&cli.path, force),

        Commands::Score {
            scores,
            set,
            benchmarks,
            all_benchmarks,
            format,
            output,
            explain,
        } => {
            let project = load_config(&cli.path)?;
            let format = format
                .or_else(|| project.defaults.format.clone())
                .or_else(|| user.format().map(str::to_string))
                .unwrap_or_else(|| "text".to_string());
            score::run(
                &project,
                score::ScoreArgs {
                    scores_file: scores.as_deref(),
                    assignments: set,
                    benchmarks,
                    all_benchmarks,
                    format: &format,
                    output: output.as_deref(),
                    explain,
                },
            )
        }

        Commands::Classify { value, json } => classify::run(value, json),

        Commands::Dimensions { json } => catalog::dimensions(&load_config(&cli.path)?, json),

        Commands::Benchmarks { json } => catalog::benchmarks(&load_config(&cli.path)?, json),
    }
}

/// Load and validate the project config in `path`
fn load_config(path: &Path) -> Result<ProjectConfig> {
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    let config = load_project_config(path)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    debug!(
        "Config: {} custom dimensions, {} benchmarks",
        config.dimensions.len(),
        config.benchmarks.len()
    );
    Ok(config)
}
