//! Caller-owned scoring state
//!
//! Holds the active dimension table and the user's ratings for one process.
//! The scorer itself stays stateless; this is the state an embedding
//! application keeps between inputs.

use super::{ComplexityScorer, DimensionTable, ScoringError, ScoringResult};
use crate::config::ScoringConfig;
use crate::models::{ComplexityResult, ScoreSet};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ScoringSession {
    table: DimensionTable,
    config: ScoringConfig,
    scores: ScoreSet,
}

impl ScoringSession {
    pub fn new(table: DimensionTable, config: ScoringConfig) -> Self {
        Self {
            table,
            config,
            scores: ScoreSet::new(),
        }
    }

    /// Rate one dimension, replacing any earlier rating for it
    pub fn set(&mut self, id: &str, value: f64) -> ScoringResult<Option<f64>> {
        if !self.table.contains(id) {
            return Err(ScoringError::UnknownDimension(id.to_string()));
        }
        self.scorer().validate(id, value)?;
        let previous = self.scores.insert(id, value);
        debug!("Set {} = {} (was {:?})", id, value, previous);
        Ok(previous)
    }

    /// Apply a whole score set; nothing is applied if any entry is rejected
    pub fn set_all(&mut self, scores: &ScoreSet) -> ScoringResult<()> {
        for (id, value) in scores.iter() {
            if !self.table.contains(id) {
                return Err(ScoringError::UnknownDimension(id.to_string()));
            }
            self.scorer().validate(id, value)?;
        }
        for (id, value) in scores.iter() {
            self.scores.insert(id, value);
        }
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<f64> {
        self.scores.remove(id)
    }

    /// Forget every rating
    pub fn reset(&mut self) {
        debug!("Resetting {} scores", self.scores.len());
        self.scores.clear();
    }

    pub fn scores(&self) -> &ScoreSet {
        &self.scores
    }

    pub fn table(&self) -> &DimensionTable {
        &self.table
    }

    pub fn scorer(&self) -> ComplexityScorer<'_> {
        ComplexityScorer::new(&self.table, &self.config)
    }

    /// Current result for the ratings recorded so far
    pub fn result(&self) -> ScoringResult<ComplexityResult> {
        self.scorer().calculate(&self.scores)
    }
}

impl Default for ScoringSession {
    fn default() -> Self {
        Self::new(DimensionTable::default(), ScoringConfig::default())
    }
}
