//! JSON reporter
//!
//! Outputs the full ComplexityReport as pretty-printed JSON. An unscored
//! process has `"weighted_score": null`.

use crate::models::ComplexityReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ComplexityReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
