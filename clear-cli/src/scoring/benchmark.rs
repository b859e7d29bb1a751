//! Benchmark comparison
//!
//! Benchmarks are fixed reference scores for well-known processes. They are
//! only ever classified, never run through the scorer.

use super::complexity_scorer::{classify_value, round_to_tenth};
use crate::models::{Benchmark, BenchmarkComparison, BenchmarkRelation, ComplexityResult};

/// Deltas smaller than this (in either direction) count as comparable
pub const COMPARABLE_DELTA: f64 = 0.5;

/// Compare a computed result against one benchmark
pub fn compare(result: &ComplexityResult, benchmark: &Benchmark) -> BenchmarkComparison {
    let delta = result
        .weighted_score
        .value()
        .map(|score| round_to_tenth(score - benchmark.score));

    let relation = match delta {
        None => BenchmarkRelation::Unscored,
        Some(d) if d.abs() < COMPARABLE_DELTA => BenchmarkRelation::Comparable,
        Some(d) if d > 0.0 => BenchmarkRelation::Harder,
        Some(_) => BenchmarkRelation::Easier,
    };

    BenchmarkComparison {
        benchmark: benchmark.clone(),
        benchmark_label: classify_value(benchmark.score),
        delta,
        relation,
    }
}

/// Compare against every benchmark, keeping their order
pub fn compare_all(result: &ComplexityResult, benchmarks: &[Benchmark]) -> Vec<BenchmarkComparison> {
    benchmarks.iter().map(|b| compare(result, b)).collect()
}
