//! Model inference
//!
//! The classifier and regressor are opaque scoring functions trained
//! offline (originally a gradient-boosted tree ensemble). This module
//! defines their contracts, the two-stage execution policy, and bundled
//! heuristic baselines that satisfy the contracts without a trained
//! artifact.

pub mod heuristic;
pub mod two_stage;

use crate::error::AssessError;
use crate::features::vector::{Feature, FeatureVector};

/// Delay/no-delay scoring function with a local explanation step
///
/// `score` returns the probability that the flight arrives 15 or more
/// minutes late. `explain` returns signed per-feature contributions for
/// the current vector only (local, not global, attribution); the order of
/// the returned pairs is preserved by the ranker as the tie-break order.
pub trait DelayClassifier: Send + Sync {
    /// Probability of a 15-minute-plus arrival delay, in [0, 1]
    fn score(&self, features: &FeatureVector) -> Result<f64, AssessError>;

    /// Signed per-feature contributions for this vector
    fn explain(&self, features: &FeatureVector) -> Result<Vec<(Feature, f64)>, AssessError>;
}

/// Delay duration scoring function
///
/// Trained only on historically delayed flights: the output answers
/// "if this flight is delayed, how long?", not "will it be delayed?".
pub trait DelayRegressor: Send + Sync {
    /// Expected delay duration in minutes, >= 0
    fn score(&self, features: &FeatureVector) -> Result<f64, AssessError>;
}
