//! CLEAR - process complexity scoring
//!
//! Rates how hard a government administrative process is to get through,
//! from weighted 1-10 dimension scores, and places the result in a severity
//! band that can be compared against fixed benchmarks.

pub mod config;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use models::{
    Benchmark, BenchmarkComparison, BenchmarkRelation, ComplexityLabel, ComplexityReport,
    ComplexityResult, Dimension, DimensionContribution, ScoreSet, WeightedScore,
};
pub use scoring::{
    classify, classify_value, compare, compute_score, ComplexityScorer, DimensionTable,
    ScoringError, ScoringSession,
};
