//! Dimension tables
//!
//! A table is the ordered list of dimensions a process is rated on. Tables
//! built from configuration are checked once, up front, so the scorer never
//! sees duplicate ids or weights that do not add up.

use super::ScoringError;
use crate::models::Dimension;
use std::collections::HashSet;

/// Tolerance used when checking that weights sum to 1.0
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 0.001;

/// The shipped dimension set
pub fn default_dimensions() -> Vec<Dimension> {
    vec![
        Dimension::new("stepCount", "Step Count", 0.15)
            .with_description("How many distinct steps the process takes"),
        Dimension::new("timeRequired", "Time Required", 0.20)
            .with_description("Elapsed time from start to finish"),
        Dimension::new("documentBurden", "Document Burden", 0.15)
            .with_description("Documents that must be gathered or produced"),
        Dimension::new("agencyTouchpoints", "Agency Touchpoints", 0.10)
            .with_description("Separate offices or agencies involved"),
        Dimension::new("cost", "Cost", 0.15).with_description("Fees and incidental expenses"),
        Dimension::new("languageComplexity", "Language Complexity", 0.10)
            .with_description("How hard the forms and instructions are to read"),
        Dimension::new("errorRisk", "Error Risk", 0.10)
            .with_description("Likelihood that a mistake causes rejection or delay"),
        Dimension::new("accessibility", "Accessibility", 0.05)
            .with_description("Barriers for people with disabilities or limited access"),
    ]
}

/// A validated, ordered set of dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionTable {
    dimensions: Vec<Dimension>,
}

impl DimensionTable {
    /// Validate with the default tolerance
    pub fn new(dimensions: Vec<Dimension>) -> Result<Self, ScoringError> {
        Self::with_tolerance(dimensions, DEFAULT_WEIGHT_TOLERANCE)
    }

    /// Validate a table: non-empty, unique ids, finite non-negative weights
    /// summing to 1.0 within `tolerance`.
    pub fn with_tolerance(dimensions: Vec<Dimension>, tolerance: f64) -> Result<Self, ScoringError> {
        if dimensions.is_empty() {
            return Err(ScoringError::InvalidDimensionTable(
                "at least one dimension is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for dim in &dimensions {
            if dim.id.trim().is_empty() {
                return Err(ScoringError::InvalidDimensionTable(
                    "dimension ids must not be empty".to_string(),
                ));
            }
            if !seen.insert(dim.id.as_str()) {
                return Err(ScoringError::InvalidDimensionTable(format!(
                    "duplicate dimension id '{}'",
                    dim.id
                )));
            }
            if !dim.weight.is_finite() || dim.weight < 0.0 {
                return Err(ScoringError::InvalidDimensionTable(format!(
                    "dimension '{}' has invalid weight {}",
                    dim.id, dim.weight
                )));
            }
        }

        let sum: f64 = dimensions.iter().map(|d| d.weight).sum();
        if (sum - 1.0).abs() > tolerance {
            return Err(ScoringError::InvalidDimensionTable(format!(
                "weights sum to {:.4}, expected 1.0",
                sum
            )));
        }

        Ok(Self { dimensions })
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn get(&self, id: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.dimensions.iter().map(|d| d.id.as_str())
    }
}

impl Default for DimensionTable {
    fn default() -> Self {
        Self {
            dimensions: default_dimensions(),
        }
    }
}
