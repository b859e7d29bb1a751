//! Core data models for CLEAR
//!
//! These models describe process complexity dimensions, the user-supplied
//! scores for them, and the derived results and benchmark comparisons.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named axis of process complexity (e.g. "Time Required")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Dimension {
    pub fn new(id: impl Into<String>, label: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            weight,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Label for display, falling back to the id when no label is configured
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// Partial mapping from dimension id to a 1-10 rating.
///
/// Absent entries mean "not yet scored". Inserting an id that is already
/// present overwrites the previous value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreSet {
    scores: BTreeMap<String, f64>,
}

impl ScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score, returning the value it replaced (if any).
    ///
    /// No range check happens here; the scorer validates every entry.
    pub fn insert(&mut self, id: impl Into<String>, value: f64) -> Option<f64> {
        self.scores.insert(id.into(), value)
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.scores.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.scores.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<f64> {
        self.scores.remove(id)
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Apply every entry of `other` on top of this set (other wins)
    pub fn merge(&mut self, other: ScoreSet) {
        self.scores.extend(other.scores);
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ScoreSet {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        let mut set = ScoreSet::new();
        for (id, value) in iter {
            set.insert(id, value);
        }
        set
    }
}

/// The weighted score of a process, or the "unscored" sentinel.
///
/// Deliberately not `PartialOrd`: an unscored process has no position on the
/// numeric scale. Serialized as `null` or a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum WeightedScore {
    Unscored,
    Scored(f64),
}

impl WeightedScore {
    pub fn value(&self) -> Option<f64> {
        match self {
            WeightedScore::Unscored => None,
            WeightedScore::Scored(v) => Some(*v),
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, WeightedScore::Scored(_))
    }
}

impl From<Option<f64>> for WeightedScore {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => WeightedScore::Scored(v),
            _ => WeightedScore::Unscored,
        }
    }
}

impl From<WeightedScore> for Option<f64> {
    fn from(value: WeightedScore) -> Self {
        value.value()
    }
}

impl std::fmt::Display for WeightedScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightedScore::Unscored => write!(f, "—"),
            WeightedScore::Scored(v) => write!(f, "{:.1}", v),
        }
    }
}

/// Severity band for a weighted score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityLabel {
    #[serde(rename = "Not Scored")]
    NotScored,
    #[serde(rename = "Low Complexity")]
    Low,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "High Complexity")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ComplexityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLabel::NotScored => "Not Scored",
            ComplexityLabel::Low => "Low Complexity",
            ComplexityLabel::Moderate => "Moderate",
            ComplexityLabel::High => "High Complexity",
            ComplexityLabel::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for ComplexityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one dimension fed into a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionContribution {
    pub id: String,
    pub label: String,
    pub weight: f64,
    /// The user's rating, `None` when not yet scored
    pub score: Option<f64>,
    /// Fraction of the scored weight this dimension carries (0 when unscored)
    pub normalized_weight: f64,
}

/// Result of scoring a process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityResult {
    pub weighted_score: WeightedScore,
    pub completeness_percent: u8,
    pub label: ComplexityLabel,
    pub scored_count: usize,
    pub total_count: usize,
    pub dimensions: Vec<DimensionContribution>,
}

/// A fixed reference score for a named process, used for comparison only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub name: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Benchmark {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
            description: None,
        }
    }
}

/// Where a computed score sits relative to a benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkRelation {
    Harder,
    Easier,
    Comparable,
    Unscored,
}

impl std::fmt::Display for BenchmarkRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchmarkRelation::Harder => write!(f, "harder"),
            BenchmarkRelation::Easier => write!(f, "easier"),
            BenchmarkRelation::Comparable => write!(f, "comparable"),
            BenchmarkRelation::Unscored => write!(f, "not comparable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub benchmark: Benchmark,
    pub benchmark_label: ComplexityLabel,
    /// Computed minus benchmark, one decimal; `None` when the process is unscored
    pub delta: Option<f64>,
    pub relation: BenchmarkRelation,
}

/// Everything a reporter renders for one scoring run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityReport {
    pub result: ComplexityResult,
    #[serde(default)]
    pub comparisons: Vec<BenchmarkComparison>,
}
