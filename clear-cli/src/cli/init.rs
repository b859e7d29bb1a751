//! Init command - write a starter clear.toml

use anyhow::{Context, Result};
use clear::config::TOML_CONFIG_FILE;
use clear::scoring::default_dimensions;
use console::style;
use std::fmt::Write as _;
use std::path::Path;

/// Run the init command
pub(super) fn run(path: &Path, force: bool) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    let config_path = path.join(TOML_CONFIG_FILE);
    if config_path.exists() && !force {
        println!(
            "{} {} already exists (use --force to overwrite)",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, starter_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );

    println!("\nNext steps:");
    println!("  {} Rate a process", style("clear score --set timeRequired=6").cyan());
    println!("  {} See the dimensions", style("clear dimensions").cyan());

    Ok(())
}

/// Starter config listing the shipped dimensions
fn starter_config() -> String {
    let mut out = String::from(
        r#"# CLEAR configuration

[scoring]
# Reject fractional ratings such as 2.5
require_integer_scores = false
# Allowed deviation of the weight sum from 1.0
weight_tolerance = 0.001

# Dimensions and weights. Weights must add up to 1.0.
"#,
    );

    for dim in default_dimensions() {
        let _ = write!(
            out,
            "\n[[dimensions]]\nid = \"{}\"\nlabel = \"{}\"\nweight = {}\n",
            dim.id, dim.label, dim.weight
        );
        if let Some(description) = &dim.description {
            let _ = writeln!(out, "description = \"{}\"", description);
        }
    }

    out.push_str(
        r#"
# Reference scores for comparison, e.g.
# [[benchmarks]]
# name = "Passport Renewal"
# score = 6.4

[defaults]
# Default output format (text, json, markdown)
format = "text"
# Benchmarks to compare against on every run
benchmarks = []
"#,
    );
    out
}
