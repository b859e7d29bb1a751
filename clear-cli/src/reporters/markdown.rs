//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Suitable for pasting a process assessment into an issue, a wiki page or
//! a case note.

use crate::models::{ComplexityLabel, ComplexityReport};
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &ComplexityReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    md.push_str(&render_dimensions(report));

    if !report.comparisons.is_empty() {
        md.push('\n');
        md.push_str(&render_benchmarks(report));
    }

    md.push('\n');
    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(report: &ComplexityReport) -> String {
    let result = &report.result;
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# {} Process Complexity

**{}** | **Score: {}** | **Completeness: {}%**

Generated: {}
"#,
        label_emoji(result.label),
        result.label,
        result.weighted_score,
        result.completeness_percent,
        timestamp
    )
}

fn render_dimensions(report: &ComplexityReport) -> String {
    let mut md = String::from("## Dimensions\n\n| Dimension | Weight | Score |\n|-----------|--------|-------|\n");
    for dim in &report.result.dimensions {
        let score = dim
            .score
            .map(|s| format!("{}", s))
            .unwrap_or_else(|| "—".to_string());
        md.push_str(&format!(
            "| {} | {:.0}% | {} |\n",
            dim.label,
            dim.weight * 100.0,
            score
        ));
    }
    md
}

fn render_benchmarks(report: &ComplexityReport) -> String {
    let mut md = String::from(
        "## Benchmarks\n\n| Process | Score | Label | Difference |\n|---------|-------|-------|------------|\n",
    );
    for cmp in &report.comparisons {
        let delta = cmp
            .delta
            .map(|d| format!("{:+.1} ({})", d, cmp.relation))
            .unwrap_or_else(|| "—".to_string());
        md.push_str(&format!(
            "| {} | {:.1} | {} | {} |\n",
            cmp.benchmark.name, cmp.benchmark.score, cmp.benchmark_label, delta
        ));
    }
    md
}

fn render_footer() -> String {
    "---\n\n*Scores are a weighted average of the rated dimensions (1 = simple, 10 = very hard).*\n"
        .to_string()
}

fn label_emoji(label: ComplexityLabel) -> &'static str {
    match label {
        ComplexityLabel::NotScored => "⚪",
        ComplexityLabel::Low => "🟢",
        ComplexityLabel::Moderate => "🟡",
        ComplexityLabel::High => "🟠",
        ComplexityLabel::VeryHigh => "🔴",
    }
}
