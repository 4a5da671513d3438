//! Configuration for a reconciliation run.
//!
//! All tunables travel as an explicit value passed into the ranking call;
//! there is no process-wide mutable state.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Minimum similarity for a candidate to be retained. Lower raises recall
/// and lowers precision.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.75;

/// Candidate matches retained per ontology concept.
pub const DEFAULT_TOP_N: usize = 5;

/// Options controlling matching behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Similarity threshold in `[0.0, 1.0]`.
    pub threshold: f64,
    /// Maximum mapping records per ontology concept; at least 1.
    pub top_n: usize,
    /// Explicit ontology namespace. When set, auto-detection is skipped.
    pub namespace: Option<String>,
    /// Case-insensitive substring matched against declared prefix names and
    /// namespace IRIs during auto-detection.
    pub namespace_hint: Option<String>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            top_n: DEFAULT_TOP_N,
            namespace: None,
            namespace_hint: None,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_namespace_hint(mut self, hint: impl Into<String>) -> Self {
        self.namespace_hint = Some(hint.into());
        self
    }

    /// Check that the tunables are within their documented ranges.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        if self.top_n == 0 {
            return Err(ModelError::InvalidTopN);
        }
        Ok(())
    }
}
