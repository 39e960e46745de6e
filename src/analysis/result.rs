//! Assessment result types

use serde::{Deserialize, Serialize};

use crate::analysis::attribution::Attribution;
use crate::analysis::risk::RiskLevel;
use crate::features::route::RouteInfo;

/// Complete assessment result
///
/// Created per request, immutable once returned, never persisted by the
/// core. Serializes in the camelCase shape the serving layer renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Probability of a 15-minute-plus arrival delay (0-1)
    pub probability: f64,

    /// Probability as a percentage, rounded to one decimal
    pub probability_percent: f64,

    /// Conditional expected delay in minutes: "if delayed, how long".
    /// Reported regardless of probability unless the regression policy
    /// skipped the regressor, in which case it is zero.
    pub expected_delay_minutes: f64,

    /// Risk bucket for the delay probability
    pub risk_level: RiskLevel,

    /// User-facing text for the probability bucket
    pub risk_text: String,

    /// Independent risk bucket for the expected duration; display styling
    /// only, never fed back into `risk_level`
    pub delay_risk_level: RiskLevel,

    /// Ranked per-feature attributions, largest |weight| first
    pub attributions: Vec<Attribution>,

    /// Route distance and estimated duration for display
    pub route: RouteInfo,

    /// Assessment metadata
    pub metadata: AssessmentMetadata,
}

/// Assessment metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionMetadata {
    /// Feature schema tag the vector was built against
    pub schema: String,

    /// Whether weather observations actually contributed features
    pub weather_used: bool,

    /// Whether the duration regressor ran
    pub regression_applied: bool,

    /// Wall-clock pipeline time in milliseconds
    pub processing_time_ms: f64,

    /// Engine version that produced this result
    pub engine_version: String,
}

// The serving layer knows this block as assessment metadata
pub use PredictionMetadata as AssessmentMetadata;
