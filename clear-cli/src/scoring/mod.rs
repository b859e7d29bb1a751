//! Process Complexity Scoring
//!
//! This module rates how hard a government process is to get through, from
//! up to eight weighted dimension scores supplied by the user.
//!
//! # Scoring Formula
//!
//! ```text
//! Weighted Score = Σ (score_d × weight_d) / Σ weight_d     over scored d only
//! Completeness   = round(100 × scored / total)
//! ```
//!
//! Dimensions that have not been scored are left out of both sums, so a
//! partly rated process is not dragged toward zero. The weighted score is
//! rounded to one decimal before it is classified.
//!
//! # Severity Bands (inclusive upper bounds)
//!
//! - ≤ 3.0: Low Complexity
//! - ≤ 5.0: Moderate
//! - ≤ 7.0: High Complexity
//! - above: Very High
//! - nothing scored: Not Scored
//!
//! # Example
//!
//! Step Count 3, Time Required 5, Cost 2 (weights 0.15, 0.20, 0.15):
//!
//! ```text
//! (3×0.15 + 5×0.20 + 2×0.15) / 0.50 = 3.5  → Moderate, 38% complete
//! ```

mod benchmark;
mod complexity_scorer;
mod dimensions;
mod session;

pub use benchmark::{compare, compare_all, COMPARABLE_DELTA};
pub use complexity_scorer::{
    classify, classify_value, compute_score, round_to_tenth, validate_score, ComplexityScorer,
    MAX_SCORE, MIN_SCORE,
};
pub use dimensions::{default_dimensions, DimensionTable, DEFAULT_WEIGHT_TOLERANCE};
pub use session::ScoringSession;

use thiserror::Error;

/// Why a score was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidScoreReason {
    OutOfRange,
    NotFinite,
    NotInteger,
}

impl std::fmt::Display for InvalidScoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidScoreReason::OutOfRange => write!(f, "must be between 1 and 10"),
            InvalidScoreReason::NotFinite => write!(f, "must be a finite number"),
            InvalidScoreReason::NotInteger => write!(f, "must be a whole number"),
        }
    }
}

/// Errors that can occur while scoring
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("Invalid score {value} for dimension '{dimension}': {reason}")]
    InvalidScore {
        dimension: String,
        value: f64,
        reason: InvalidScoreReason,
    },

    #[error("Unknown dimension '{0}'")]
    UnknownDimension(String),

    #[error("Invalid dimension table: {0}")]
    InvalidDimensionTable(String),

    #[error("Unknown benchmark '{0}'")]
    UnknownBenchmark(String),

    #[error("Invalid benchmark: {0}")]
    InvalidBenchmark(String),
}

pub type ScoringResult<T> = Result<T, ScoringError>;
