//! Two-stage prediction
//!
//! Always classify; regress per policy. Both scoring functions run
//! synchronously with no retry: inference is deterministic and
//! side-effect-free, so a failure is terminal for the request.

use serde::{Deserialize, Serialize};

use crate::error::AssessError;
use crate::features::vector::FeatureVector;
use crate::ml::{DelayClassifier, DelayRegressor};

/// When the duration regressor runs relative to the classifier output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RegressionPolicy {
    /// Run the regressor on every request. The estimate is still
    /// conditional ("if delayed, how long") regardless of probability.
    Always,

    /// Run the regressor only when probability reaches the threshold;
    /// below it the expected delay is reported as zero.
    AboveProbability(f64),
}

/// Combined output of both stages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoStageOutcome {
    /// Delay probability in [0, 1]
    pub probability: f64,

    /// Conditional expected delay in minutes (0 when regression was
    /// skipped by policy)
    pub expected_delay_minutes: f64,

    /// Whether the regressor actually ran
    pub regression_applied: bool,
}

/// Executes the classify-then-regress state machine
pub struct TwoStagePredictor<'a> {
    classifier: &'a dyn DelayClassifier,
    regressor: &'a dyn DelayRegressor,
    policy: RegressionPolicy,
}

impl<'a> TwoStagePredictor<'a> {
    /// Create a predictor over borrowed scoring functions
    pub fn new(
        classifier: &'a dyn DelayClassifier,
        regressor: &'a dyn DelayRegressor,
        policy: RegressionPolicy,
    ) -> Self {
        Self {
            classifier,
            regressor,
            policy,
        }
    }

    /// Run both stages for one feature vector
    ///
    /// # Errors
    ///
    /// `PredictionFailed` when either scoring function errors, returns a
    /// non-finite value, or the classifier leaves [0, 1]. Negative
    /// regressor output clamps to zero (the regressor's training target
    /// is non-negative, so a small negative is numeric noise).
    pub fn predict(&self, features: &FeatureVector) -> Result<TwoStageOutcome, AssessError> {
        let probability = self.classifier.score(features)?;
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(AssessError::PredictionFailed(format!(
                "classifier returned {} outside [0, 1]",
                probability
            )));
        }

        let run_regression = match self.policy {
            RegressionPolicy::Always => true,
            RegressionPolicy::AboveProbability(threshold) => probability >= threshold,
        };

        let expected_delay_minutes = if run_regression {
            let minutes = self.regressor.score(features)?;
            if !minutes.is_finite() {
                return Err(AssessError::PredictionFailed(format!(
                    "regressor returned non-finite value {}",
                    minutes
                )));
            }
            if minutes < 0.0 {
                log::debug!("clamping negative regressor output {:.2} to 0", minutes);
            }
            minutes.max(0.0)
        } else {
            log::debug!(
                "regression skipped by policy at probability {:.3}",
                probability
            );
            0.0
        };

        Ok(TwoStageOutcome {
            probability,
            expected_delay_minutes,
            regression_applied: run_regression,
        })
    }
}
