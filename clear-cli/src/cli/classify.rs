//! Classify command - band a fixed score without scoring anything

use anyhow::Result;
use clear::scoring::{classify_value, round_to_tenth};

/// Run the classify command
pub(super) fn run(value: f64, json: bool) -> Result<()> {
    let label = classify_value(value);
    if json {
        let out = serde_json::json!({
            "score": round_to_tenth(value),
            "label": label,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{:.1}  {}", value, label);
    }
    Ok(())
}
