//! Weighted complexity scorer
//!
//! Turns a partial score set into a weighted score, a completeness
//! percentage and a severity label.

use super::{DimensionTable, InvalidScoreReason, ScoringError, ScoringResult};
use crate::config::ScoringConfig;
use crate::models::{
    ComplexityLabel, ComplexityResult, Dimension, DimensionContribution, ScoreSet, WeightedScore,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Lowest valid rating
pub const MIN_SCORE: f64 = 1.0;
/// Highest valid rating
pub const MAX_SCORE: f64 = 10.0;

/// Upper bounds (inclusive) of each band below Very High
const LOW_MAX: f64 = 3.0;
const MODERATE_MAX: f64 = 5.0;
const HIGH_MAX: f64 = 7.0;

/// Stateless scorer over a validated dimension table
pub struct ComplexityScorer<'a> {
    table: &'a DimensionTable,
    config: &'a ScoringConfig,
}

impl<'a> ComplexityScorer<'a> {
    pub fn new(table: &'a DimensionTable, config: &'a ScoringConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &DimensionTable {
        self.table
    }

    /// Score a process
    pub fn calculate(&self, scores: &ScoreSet) -> ScoringResult<ComplexityResult> {
        let result = score_dimensions(
            self.table.dimensions(),
            scores,
            self.config.require_integer_scores,
        )?;

        info!(
            "Complexity score: {} ({}) - {}/{} dimensions, {}% complete",
            result.weighted_score,
            result.label,
            result.scored_count,
            result.total_count,
            result.completeness_percent
        );

        Ok(result)
    }

    /// Check a single rating against the configured policy
    pub fn validate(&self, dimension: &str, value: f64) -> ScoringResult<()> {
        validate_score(dimension, value, self.config.require_integer_scores)
    }

    /// Generate human-readable explanation of the score
    pub fn explain(&self, result: &ComplexityResult) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "# Complexity Score: {} ({})\n",
            result.weighted_score, result.label
        ));

        lines.push("## Scoring Formula\n".to_string());
        lines.push("```".to_string());
        lines.push("Weighted = Σ(score × weight) / Σ(weight)   over scored dimensions".to_string());
        lines.push("Label    = ≤3 Low | ≤5 Moderate | ≤7 High | >7 Very High".to_string());
        lines.push("```\n".to_string());

        lines.push(format!(
            "## Completeness: {}% ({} of {} dimensions)\n",
            result.completeness_percent, result.scored_count, result.total_count
        ));

        lines.push("## Dimensions\n".to_string());
        for dim in &result.dimensions {
            match dim.score {
                Some(score) => lines.push(format!(
                    "- **{}** (weight {:.2}): {} × {:.1}% of scored weight = {:.2}",
                    dim.label,
                    dim.weight,
                    format_rating(score),
                    dim.normalized_weight * 100.0,
                    score * dim.normalized_weight
                )),
                None => lines.push(format!(
                    "- **{}** (weight {:.2}): not scored",
                    dim.label, dim.weight
                )),
            }
        }

        lines.join("\n")
    }
}

/// Score `scores` against `dimensions` with the default policy (any real
/// value in [1, 10] is accepted).
///
/// The slice is expected to come from [`DimensionTable::dimensions`]. A
/// repeated id is only counted once.
pub fn compute_score(dimensions: &[Dimension], scores: &ScoreSet) -> ScoringResult<ComplexityResult> {
    score_dimensions(dimensions, scores, false)
}

fn score_dimensions(
    dimensions: &[Dimension],
    scores: &ScoreSet,
    require_integer: bool,
) -> ScoringResult<ComplexityResult> {
    // Every entry is checked before anything is computed
    for (id, value) in scores.iter() {
        validate_score(id, value, require_integer)?;
    }

    // Repeated ids count once, first definition wins
    let mut seen = HashSet::new();
    let dimensions: Vec<&Dimension> = dimensions
        .iter()
        .filter(|d| {
            let first = seen.insert(d.id.as_str());
            if !first {
                debug!("Ignoring duplicate dimension '{}'", d.id);
            }
            first
        })
        .collect();

    for (id, _) in scores.iter() {
        if !seen.contains(id) {
            debug!("Ignoring score for unknown dimension '{}'", id);
        }
    }

    let mut total_weight = 0.0;
    let mut weighted_sum = 0.0;
    let mut scored_count = 0;

    for dim in &dimensions {
        if let Some(score) = scores.get(&dim.id) {
            total_weight += dim.weight;
            weighted_sum += score * dim.weight;
            scored_count += 1;
        }
    }

    let weighted_score = if total_weight > 0.0 {
        WeightedScore::Scored(round_to_tenth(weighted_sum / total_weight))
    } else {
        WeightedScore::Unscored
    };

    let completeness_percent = if dimensions.is_empty() {
        0
    } else {
        (scored_count as f64 / dimensions.len() as f64 * 100.0).round() as u8
    };

    let contributions = dimensions
        .iter()
        .map(|dim| {
            let score = scores.get(&dim.id);
            let normalized_weight = match score {
                Some(_) if total_weight > 0.0 => dim.weight / total_weight,
                _ => 0.0,
            };
            DimensionContribution {
                id: dim.id.clone(),
                label: dim.display_name().to_string(),
                weight: dim.weight,
                score,
                normalized_weight,
            }
        })
        .collect();

    debug!(
        "Scored {}/{} dimensions, total weight {:.2}",
        scored_count,
        dimensions.len(),
        total_weight
    );

    Ok(ComplexityResult {
        weighted_score,
        completeness_percent,
        label: classify(weighted_score),
        scored_count,
        total_count: dimensions.len(),
        dimensions: contributions,
    })
}

/// Check that a rating is a finite number in [1, 10] (and whole, if required)
pub fn validate_score(dimension: &str, value: f64, require_integer: bool) -> ScoringResult<()> {
    let reason = if !value.is_finite() {
        Some(InvalidScoreReason::NotFinite)
    } else if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        Some(InvalidScoreReason::OutOfRange)
    } else if require_integer && value.fract() != 0.0 {
        Some(InvalidScoreReason::NotInteger)
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ScoringError::InvalidScore {
            dimension: dimension.to_string(),
            value,
            reason,
        }),
        None => Ok(()),
    }
}

/// Severity band for a weighted score
pub fn classify(score: WeightedScore) -> ComplexityLabel {
    match score {
        WeightedScore::Unscored => ComplexityLabel::NotScored,
        WeightedScore::Scored(value) => classify_value(value),
    }
}

/// Severity band for a raw value, e.g. a fixed benchmark.
///
/// The value is rounded to one decimal first so it lands in the same band
/// it would be displayed in. NaN is treated as unscored.
pub fn classify_value(value: f64) -> ComplexityLabel {
    if value.is_nan() {
        return ComplexityLabel::NotScored;
    }
    let value = round_to_tenth(value);
    if value <= LOW_MAX {
        ComplexityLabel::Low
    } else if value <= MODERATE_MAX {
        ComplexityLabel::Moderate
    } else if value <= HIGH_MAX {
        ComplexityLabel::High
    } else {
        ComplexityLabel::VeryHigh
    }
}

/// Digits kept before rounding, so a true x.x5 that lands a few ulps low
/// still counts as a tie
const SNAP_SCALE: f64 = 1e9;

/// Round to one decimal place, halves away from zero
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let snapped = (value * SNAP_SCALE).round();
    if snapped.abs() >= i64::MAX as f64 {
        return (value * 10.0).round() / 10.0;
    }

    // Integer half-away-from-zero on the snapped value
    let step = (SNAP_SCALE / 10.0) as i64;
    let units = snapped as i64;
    let tenths = (units.abs() + step / 2) / step;
    units.signum() as f64 * tenths as f64 / 10.0
}

fn format_rating(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::default_dimensions;

    fn all_scored(value: f64) -> ScoreSet {
        default_dimensions()
            .into_iter()
            .map(|d| (d.id, value))
            .collect()
    }

    #[test]
    fn test_empty_scores_are_unscored() {
        let result = compute_score(&default_dimensions(), &ScoreSet::new()).unwrap();
        assert_eq!(result.weighted_score, WeightedScore::Unscored);
        assert_eq!(result.completeness_percent, 0);
        assert_eq!(result.label, ComplexityLabel::NotScored);
        assert_eq!(classify(WeightedScore::Unscored), ComplexityLabel::NotScored);
    }

    #[test]
    fn test_partial_scores_renormalize() {
        let scores: ScoreSet = [("stepCount", 3.0), ("timeRequired", 5.0), ("cost", 2.0)]
            .into_iter()
            .collect();
        let result = compute_score(&default_dimensions(), &scores).unwrap();

        assert_eq!(result.weighted_score, WeightedScore::Scored(3.5));
        assert_eq!(result.completeness_percent, 38);
        assert_eq!(result.label, ComplexityLabel::Moderate);
        assert_eq!(result.scored_count, 3);
        assert_eq!(result.total_count, 8);
    }

    #[test]
    fn test_all_sevens_is_high_at_inclusive_bound() {
        let result = compute_score(&default_dimensions(), &all_scored(7.0)).unwrap();
        assert_eq!(result.weighted_score, WeightedScore::Scored(7.0));
        assert_eq!(result.completeness_percent, 100);
        assert_eq!(result.label, ComplexityLabel::High);
    }

    #[test]
    fn test_extreme_boundaries() {
        let top = compute_score(&default_dimensions(), &all_scored(10.0)).unwrap();
        assert_eq!(top.weighted_score, WeightedScore::Scored(10.0));
        assert_eq!(top.label, ComplexityLabel::VeryHigh);

        let bottom = compute_score(&default_dimensions(), &all_scored(1.0)).unwrap();
        assert_eq!(bottom.weighted_score, WeightedScore::Scored(1.0));
        assert_eq!(bottom.label, ComplexityLabel::Low);
    }

    #[test]
    fn test_rejects_out_of_range_scores() {
        for bad in [0.0, 11.0, -3.0, 10.5] {
            let scores: ScoreSet = [("cost", 4.0), ("errorRisk", bad)].into_iter().collect();
            let err = compute_score(&default_dimensions(), &scores).unwrap_err();
            assert_eq!(
                err,
                ScoringError::InvalidScore {
                    dimension: "errorRisk".to_string(),
                    value: bad,
                    reason: InvalidScoreReason::OutOfRange,
                }
            );
        }
    }

    #[test]
    fn test_rejects_nan() {
        let scores: ScoreSet = [("cost", f64::NAN)].into_iter().collect();
        assert!(matches!(
            compute_score(&default_dimensions(), &scores),
            Err(ScoringError::InvalidScore {
                reason: InvalidScoreReason::NotFinite,
                ..
            })
        ));
    }

    #[test]
    fn test_weighted_score_is_bounded_by_inputs() {
        let cases: Vec<Vec<(&str, f64)>> = vec![
            vec![("stepCount", 2.0), ("accessibility", 9.0)],
            vec![("timeRequired", 10.0), ("cost", 1.0), ("errorRisk", 4.0)],
            vec![("documentBurden", 6.0)],
            vec![
                ("stepCount", 1.0),
                ("timeRequired", 3.0),
                ("documentBurden", 5.0),
                ("agencyTouchpoints", 7.0),
                ("cost", 9.0),
                ("languageComplexity", 10.0),
            ],
        ];

        for case in cases {
            let min = case.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
            let max = case.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
            let scores: ScoreSet = case.into_iter().collect();
            let value = compute_score(&default_dimensions(), &scores)
                .unwrap()
                .weighted_score
                .value()
                .expect("scored");
            assert!(value >= min && value <= max, "{value} not in [{min}, {max}]");
        }
    }

    #[test]
    fn test_completeness_is_monotonic() {
        let dims = default_dimensions();
        let mut scores = ScoreSet::new();
        let mut last = 0;
        for dim in &dims {
            scores.insert(dim.id.clone(), 5.0);
            let pct = compute_score(&dims, &scores).unwrap().completeness_percent;
            assert!(pct >= last);
            last = pct;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let scores: ScoreSet = [("cost", 4.0), ("timeRequired", 8.0)].into_iter().collect();
        let first = compute_score(&default_dimensions(), &scores).unwrap();
        let second = compute_score(&default_dimensions(), &scores).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.weighted_score.value().map(f64::to_bits),
            second.weighted_score.value().map(f64::to_bits)
        );
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let scores: ScoreSet = [("cost", 4.0), ("parkingAvailability", 9.0)]
            .into_iter()
            .collect();
        let result = compute_score(&default_dimensions(), &scores).unwrap();
        assert_eq!(result.weighted_score, WeightedScore::Scored(4.0));
        assert_eq!(result.scored_count, 1);
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(classify_value(3.0), ComplexityLabel::Low);
        assert_eq!(classify_value(3.1), ComplexityLabel::Moderate);
        assert_eq!(classify_value(5.0), ComplexityLabel::Moderate);
        assert_eq!(classify_value(5.8), ComplexityLabel::High);
        assert_eq!(classify_value(6.4), ComplexityLabel::High);
        assert_eq!(classify_value(7.0), ComplexityLabel::High);
        assert_eq!(classify_value(7.1), ComplexityLabel::VeryHigh);
        assert_eq!(classify_value(-2.0), ComplexityLabel::Low);
        // Rounded before banding
        assert_eq!(classify_value(3.04), ComplexityLabel::Low);
        assert_eq!(classify_value(f64::NAN), ComplexityLabel::NotScored);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_tenth(3.25), 3.3);
        assert_eq!(round_to_tenth(6.44), 6.4);
        assert_eq!(round_to_tenth(-2.25), -2.3);
    }

    #[test]
    fn test_weighted_ties_round_up() {
        // (3 * 0.15 + 4 * 0.05) / 0.20 = 3.25
        let scores: ScoreSet = [("stepCount", 3.0), ("accessibility", 4.0)]
            .into_iter()
            .collect();
        let result = compute_score(&default_dimensions(), &scores).unwrap();
        assert_eq!(result.weighted_score, WeightedScore::Scored(3.3));

        let scores: ScoreSet = [("stepCount", 5.0), ("accessibility", 8.0)]
            .into_iter()
            .collect();
        let result = compute_score(&default_dimensions(), &scores).unwrap();
        assert_eq!(result.weighted_score, WeightedScore::Scored(5.8));
    }

    #[test]
    fn test_pairwise_scores_match_exact_rounding() {
        let dims = default_dimensions();
        for (i, a) in dims.iter().enumerate() {
            for b in &dims[i + 1..] {
                let wa = (a.weight * 100.0).round() as i64;
                let wb = (b.weight * 100.0).round() as i64;
                for sa in 1..=10i64 {
                    for sb in 1..=10i64 {
                        let scores: ScoreSet = [(a.id.as_str(), sa as f64), (b.id.as_str(), sb as f64)]
                            .into_iter()
                            .collect();
                        let num = sa * wa + sb * wb;
                        let den = wa + wb;
                        let want = ((20 * num + den) / (2 * den)) as f64 / 10.0;
                        let result = compute_score(&dims, &scores).unwrap();
                        assert_eq!(
                            result.weighted_score,
                            WeightedScore::Scored(want),
                            "{}={} {}={}",
                            a.id,
                            sa,
                            b.id,
                            sb
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_duplicate_dimension_counts_once() {
        let mut dims = default_dimensions();
        dims.push(Dimension::new("cost", "Cost again", 0.15));
        let scores: ScoreSet = [("cost", 4.0), ("stepCount", 2.0)].into_iter().collect();

        let result = compute_score(&dims, &scores).unwrap();
        assert_eq!(result.weighted_score, WeightedScore::Scored(3.0));
        assert_eq!(result.scored_count, 2);
        assert_eq!(result.total_count, 8);
        assert_eq!(result.completeness_percent, 25);
    }

    #[test]
    fn test_integer_policy() {
        let table = DimensionTable::default();
        let strict = ScoringConfig {
            require_integer_scores: true,
            ..Default::default()
        };
        let scores: ScoreSet = [("cost", 2.5)].into_iter().collect();

        let lenient_config = ScoringConfig::default();
        let lenient = ComplexityScorer::new(&table, &lenient_config);
        assert_eq!(
            lenient.calculate(&scores).unwrap().weighted_score,
            WeightedScore::Scored(2.5)
        );

        let scorer = ComplexityScorer::new(&table, &strict);
        assert!(matches!(
            scorer.calculate(&scores),
            Err(ScoringError::InvalidScore {
                reason: InvalidScoreReason::NotInteger,
                ..
            })
        ));
    }

    #[test]
    fn test_contributions_cover_every_dimension() {
        let scores: ScoreSet = [("stepCount", 3.0), ("timeRequired", 5.0)].into_iter().collect();
        let result = compute_score(&default_dimensions(), &scores).unwrap();
        assert_eq!(result.dimensions.len(), 8);

        let shares: f64 = result.dimensions.iter().map(|d| d.normalized_weight).sum();
        assert!((shares - 1.0).abs() < 1e-9);

        let cost = result.dimensions.iter().find(|d| d.id == "cost").unwrap();
        assert_eq!(cost.score, None);
        assert_eq!(cost.normalized_weight, 0.0);
    }

    #[test]
    fn test_explain_mentions_every_dimension() {
        let table = DimensionTable::default();
        let config = ScoringConfig::default();
        let scorer = ComplexityScorer::new(&table, &config);
        let scores: ScoreSet = [("cost", 6.0)].into_iter().collect();
        let result = scorer.calculate(&scores).unwrap();
        let text = scorer.explain(&result);

        assert!(text.contains("# Complexity Score: 6.0 (High Complexity)"));
        assert!(text.contains("**Cost** (weight 0.15): 6"));
        assert!(text.contains("**Accessibility** (weight 0.05): not scored"));
    }
}
