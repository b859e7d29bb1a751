//! Text (terminal) reporter with colors and formatting

use crate::models::{BenchmarkComparison, ComplexityLabel, ComplexityReport, DimensionContribution};
use anyhow::Result;
use console::{style, Style};

const RULE: &str = "──────────────────────────────────────";

/// Label colors
fn label_style(label: ComplexityLabel) -> Style {
    match label {
        ComplexityLabel::NotScored => Style::new().dim(),
        ComplexityLabel::Low => Style::new().green(),
        ComplexityLabel::Moderate => Style::new().yellow(),
        ComplexityLabel::High => Style::new().red(),
        ComplexityLabel::VeryHigh => Style::new().red().bold(),
    }
}

/// Render report as formatted terminal output
pub fn render(report: &ComplexityReport) -> Result<String> {
    let result = &report.result;
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", style("CLEAR Complexity Score").bold()));
    out.push_str(&format!("{}\n", style(RULE).dim()));

    let score = match result.weighted_score.value() {
        Some(v) => format!("{:.1}/10", v),
        None => result.weighted_score.to_string(),
    };
    out.push_str(&format!(
        "Score: {}  {}  Completeness: {}% ({} of {} dimensions)\n\n",
        style(score).bold(),
        label_style(result.label).apply_to(result.label),
        result.completeness_percent,
        result.scored_count,
        result.total_count
    ));

    out.push_str(&format!("{}\n", style("DIMENSIONS").bold()));
    let width = result
        .dimensions
        .iter()
        .map(|d| d.label.chars().count())
        .max()
        .unwrap_or(0);
    for dim in &result.dimensions {
        out.push_str(&render_dimension(dim, width));
    }

    if !report.comparisons.is_empty() {
        out.push_str(&format!("\n{}\n", style("BENCHMARKS").bold()));
        let width = report
            .comparisons
            .iter()
            .map(|c| c.benchmark.name.chars().count())
            .max()
            .unwrap_or(0);
        for cmp in &report.comparisons {
            out.push_str(&render_comparison(cmp, width));
        }
    }

    Ok(out)
}

fn render_dimension(dim: &DimensionContribution, width: usize) -> String {
    let value = match dim.score {
        Some(score) if score.fract() == 0.0 => format!("{:.0}", score),
        Some(score) => format!("{:.1}", score),
        None => style("—").dim().to_string(),
    };
    format!(
        "  {:<width$}  {:>4.0}%  {}\n",
        dim.label,
        dim.weight * 100.0,
        value,
        width = width
    )
}

fn render_comparison(cmp: &BenchmarkComparison, width: usize) -> String {
    let delta = match cmp.delta {
        Some(d) => format!("{:+.1} ({})", d, cmp.relation),
        None => style(cmp.relation.to_string()).dim().to_string(),
    };
    format!(
        "  {:<width$}  {:.1}  {}  {}\n",
        cmp.benchmark.name,
        cmp.benchmark.score,
        label_style(cmp.benchmark_label).apply_to(cmp.benchmark_label),
        delta,
        width = width
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_report, unscored_report};

    #[test]
    fn test_text_render_has_score() {
        let out = render(&test_report()).expect("render text");
        assert!(out.contains("CLEAR Complexity Score"));
        assert!(out.contains("3.5/10"));
        assert!(out.contains("Moderate"));
        assert!(out.contains("38%"));
        assert!(out.contains("3 of 8 dimensions"));
    }

    #[test]
    fn test_text_render_lists_dimensions() {
        let out = render(&test_report()).expect("render text");
        assert!(out.contains("Time Required"));
        assert!(out.contains("Accessibility"));
    }

    #[test]
    fn test_text_render_benchmarks() {
        let out = render(&test_report()).expect("render text");
        assert!(out.contains("BENCHMARKS"));
        assert!(out.contains("Passport Renewal"));
        assert!(out.contains("-2.9 (easier)"));
    }

    #[test]
    fn test_text_render_unscored() {
        let out = render(&unscored_report()).expect("render text");
        assert!(out.contains("Not Scored"));
        assert!(out.contains("—"));
        assert!(!out.contains("BENCHMARKS"));
    }
}
