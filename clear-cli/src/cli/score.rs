//! Score command - rate a process and report its complexity

use anyhow::{Context, Result};
use clear::config::ProjectConfig;
use clear::models::{ComplexityReport, ScoreSet};
use clear::reporters::{self, OutputFormat};
use clear::scoring::compare_all;
use console::style;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

pub(super) struct ScoreArgs<'a> {
    pub scores_file: Option<&'a Path>,
    pub assignments: Vec<(String, f64)>,
    pub benchmarks: Vec<String>,
    pub all_benchmarks: bool,
    pub format: &'a str,
    pub output: Option<&'a Path>,
    pub explain: bool,
}

/// Run the score command
pub(super) fn run(project: &ProjectConfig, args: ScoreArgs<'_>) -> Result<()> {
    let format = OutputFormat::from_str(args.format)?;

    let mut scores = match args.scores_file {
        Some(path) => read_scores(path)?,
        None => ScoreSet::new(),
    };
    scores.merge(args.assignments.into_iter().collect());

    let mut session = project.session()?;
    session.set_all(&scores)?;
    let result = session.result()?;

    let benchmark_names: Vec<String> = if args.all_benchmarks {
        project.benchmarks.iter().map(|b| b.name.clone()).collect()
    } else if args.benchmarks.is_empty() {
        project.defaults.benchmarks.clone()
    } else {
        args.benchmarks
    };
    let benchmarks = project.resolve_benchmarks(&benchmark_names)?;
    debug!("Comparing against {} benchmarks", benchmarks.len());

    let report = ComplexityReport {
        comparisons: compare_all(&result, &benchmarks),
        result,
    };
    let rendered = reporters::report_with_format(&report, format)?;

    match args.output {
        Some(path) => {
            let out_path = output_path(path, format);
            std::fs::write(&out_path, &rendered)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
            eprintln!("Report written to: {}", style(out_path.display()).cyan());
        }
        None => println!("{}", rendered),
    }

    let explain = args.explain || project.defaults.explain.unwrap_or(false);
    if explain {
        // Keep stdout parseable for JSON
        let explanation = session.scorer().explain(&report.result);
        if format == OutputFormat::Json {
            eprintln!("{}", explanation);
        } else {
            println!("\n{}", explanation);
        }
    }

    Ok(())
}

/// Read a score set from JSON or TOML
fn read_scores(path: &Path) -> Result<ScoreSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scores from {}", path.display()))?;

    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

    let scores = if is_toml {
        toml::from_str(&content)
            .with_context(|| format!("Invalid TOML scores in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON scores in {}", path.display()))?
    };
    Ok(scores)
}

/// Resolve `-o`: a directory gets a default file name
fn output_path(path: &Path, format: OutputFormat) -> PathBuf {
    if path.is_dir() {
        path.join(format!("clear-score.{}", reporters::file_extension(format)))
    } else {
        path.to_path_buf()
    }
}
