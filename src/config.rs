//! Configuration parameters for delay assessment

use crate::features::vector::FeatureSchema;
use crate::ml::two_stage::RegressionPolicy;

/// Assessment configuration parameters
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    /// Append the derived weather feature block to the feature vector
    /// (default: true). Must match the schema the scoring functions were
    /// trained against; toggling it changes the feature schema version.
    pub include_weather: bool,

    /// When the duration regressor runs relative to the classifier output
    /// (default: `RegressionPolicy::Always`)
    pub regression_policy: RegressionPolicy,

    /// Maximum number of ranked attributions to return (default: Some(8)).
    /// `None` returns the full ranked list.
    pub max_attributions: Option<usize>,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            include_weather: true,
            regression_policy: RegressionPolicy::Always,
            max_attributions: Some(8),
        }
    }
}

impl AssessmentConfig {
    /// Feature schema implied by this configuration
    pub fn schema(&self) -> FeatureSchema {
        if self.include_weather {
            FeatureSchema::WeatherV1
        } else {
            FeatureSchema::BaseV1
        }
    }
}
