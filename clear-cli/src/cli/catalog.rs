//! Dimensions and benchmarks commands - show what a score is made of

use anyhow::Result;
use clear::config::ProjectConfig;
use clear::scoring::classify_value;
use console::style;

/// List the active dimension table
pub(super) fn dimensions(project: &ProjectConfig, json: bool) -> Result<()> {
    let table = project.dimension_table()?;

    if json {
        println!("{}", serde_json::to_string_pretty(table.dimensions())?);
        return Ok(());
    }

    println!("\n{}\n", style("Dimensions").bold());
    let width = table
        .dimensions()
        .iter()
        .map(|d| d.id.len())
        .max()
        .unwrap_or(0);
    for dim in table.dimensions() {
        println!(
            "  {:<width$}  {:>4.0}%  {}",
            style(&dim.id).cyan(),
            dim.weight * 100.0,
            dim.display_name(),
            width = width
        );
        if let Some(description) = &dim.description {
            println!("  {:<width$}         {}", "", style(description).dim(), width = width);
        }
    }
    Ok(())
}

/// List configured benchmarks
pub(super) fn benchmarks(project: &ProjectConfig, json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = project
            .benchmarks
            .iter()
            .map(|b| {
                serde_json::json!({
                    "name": b.name,
                    "score": b.score,
                    "label": classify_value(b.score),
                    "description": b.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if project.benchmarks.is_empty() {
        println!(
            "No benchmarks configured. Add [[benchmarks]] entries to {}",
            style("clear.toml").cyan()
        );
        return Ok(());
    }

    println!("\n{}\n", style("Benchmarks").bold());
    for benchmark in &project.benchmarks {
        println!(
            "  {:.1}  {:<16}  {}",
            benchmark.score,
            classify_value(benchmark.score).as_str(),
            benchmark.name
        );
    }
    Ok(())
}
