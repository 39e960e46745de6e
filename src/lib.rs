//! # Delaycast
//!
//! A flight-delay risk assessment engine: predicts whether a scheduled
//! flight will arrive 15 or more minutes late, estimates the delay
//! duration, and explains the prediction by ranking per-feature
//! contributions.
//!
//! ## Features
//!
//! - **Feature construction**: fixed-order vectors from itinerary and
//!   optional weather observations, matching the trained encoding exactly
//! - **Weather risk scoring**: bounded 0-10 component and composite scores
//!   with cross-location differentials
//! - **Two-stage inference**: delay probability, then a conditional
//!   duration estimate ("if delayed, how long")
//! - **Attribution ranking**: display-ready, magnitude-ordered local
//!   explanations
//!
//! ## Quick Start
//!
//! ```
//! use delaycast::{Assessor, AssessmentConfig, ItineraryRequest};
//!
//! let assessor = Assessor::with_heuristics(AssessmentConfig::default());
//!
//! let request = ItineraryRequest {
//!     origin: "ATL".to_string(),
//!     destination: "LAX".to_string(),
//!     month: 6,
//!     day_of_month: 15,
//!     day_of_week: 5,
//!     dep_hour: 17,
//!     arr_hour: 20,
//!     airline: "DL".to_string(),
//! };
//!
//! let result = assessor.assess(&request, None)?;
//! println!("{:.1}% ({})", result.probability_percent, result.risk_text);
//! # Ok::<(), delaycast::AssessError>(())
//! ```
//!
//! ## Architecture
//!
//! The assessment pipeline follows this flow:
//!
//! ```text
//! Itinerary + Weather → Feature Vector → Classify → Regress → Rank + Bucket → Result
//! ```
//!
//! Components are stateless and side-effect-free; an [`Assessor`] loads
//! its scoring functions once and can be shared read-only across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod input;
pub mod ml;

// Re-export main types
pub use analysis::result::{AssessmentMetadata, PredictionResult};
pub use analysis::risk::RiskLevel;
pub use config::AssessmentConfig;
pub use error::AssessError;
pub use features::route::{route_info, RouteInfo};
pub use input::itinerary::ItineraryRequest;
pub use input::weather::{RouteObservations, WeatherObservation};
pub use ml::two_stage::RegressionPolicy;

use analysis::attribution::{rank_attributions, AttributionContext};
use features::encoding::Encodings;
use features::route::estimate_duration_minutes;
use features::vector::{Feature, FeatureVectorBuilder};
use ml::heuristic::{HeuristicClassifier, HeuristicRegressor};
use ml::two_stage::TwoStagePredictor;
use ml::{DelayClassifier, DelayRegressor};

/// The delay assessment pipeline
///
/// Owns the scoring functions, encoding tables, and configuration. Built
/// once at startup; immutable afterwards, so it can be shared freely
/// between request handlers.
pub struct Assessor {
    classifier: Box<dyn DelayClassifier>,
    regressor: Box<dyn DelayRegressor>,
    encodings: Encodings,
    config: AssessmentConfig,
}

impl Assessor {
    /// Assemble a pipeline around trained scoring functions
    pub fn new(
        classifier: Box<dyn DelayClassifier>,
        regressor: Box<dyn DelayRegressor>,
        config: AssessmentConfig,
    ) -> Self {
        Self {
            classifier,
            regressor,
            encodings: Encodings::standard(),
            config,
        }
    }

    /// Assemble a pipeline around the bundled heuristic scorers
    ///
    /// Useful when no trained artifact is deployed; scores follow known
    /// delay patterns instead of a fitted model.
    pub fn with_heuristics(config: AssessmentConfig) -> Self {
        let encodings = Encodings::standard();
        Self {
            classifier: Box::new(HeuristicClassifier::new(encodings)),
            regressor: Box::new(HeuristicRegressor::new(encodings)),
            encodings,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Assess one itinerary
    ///
    /// Runs the full pipeline: feature construction, two-stage inference,
    /// attribution ranking, and risk bucketing. Missing weather degrades
    /// to neutral zero-risk features; it is never an error.
    ///
    /// # Errors
    ///
    /// `MalformedRequest` for out-of-range fields, `UnknownCategory` for
    /// codes outside the trained encoding tables, `PredictionFailed` when
    /// a scoring function errors or returns a non-finite value.
    pub fn assess(
        &self,
        request: &ItineraryRequest,
        weather: Option<&RouteObservations>,
    ) -> Result<PredictionResult, AssessError> {
        use std::time::Instant;
        let start_time = Instant::now();

        log::debug!(
            "assessing {}-{} ({} dep {}:00)",
            request.origin,
            request.destination,
            request.airline,
            request.dep_hour
        );

        let schema = self.config.schema();
        let builder = FeatureVectorBuilder::new(self.encodings, schema);
        let vector = builder.build(request, weather)?;

        let predictor = TwoStagePredictor::new(
            self.classifier.as_ref(),
            self.regressor.as_ref(),
            self.config.regression_policy,
        );
        let outcome = predictor.predict(&vector)?;

        let raw_attributions = self.classifier.explain(&vector)?;
        let ctx = AttributionContext {
            request,
            vector: &vector,
            encodings: &self.encodings,
        };
        let attributions = rank_attributions(&raw_attributions, &ctx, self.config.max_attributions);

        let distance_miles = vector.get(Feature::Distance).unwrap_or(0.0);
        let route = RouteInfo {
            distance_miles,
            estimated_duration_minutes: estimate_duration_minutes(distance_miles),
        };

        let risk_level = RiskLevel::from_probability(outcome.probability);
        let processing_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;

        log::debug!(
            "assessed {}-{}: p={:.3} ({}), expected {:.1} min in {:.2} ms",
            request.origin,
            request.destination,
            outcome.probability,
            risk_level.as_str(),
            outcome.expected_delay_minutes,
            processing_time_ms
        );

        Ok(PredictionResult {
            probability: outcome.probability,
            probability_percent: (outcome.probability * 1000.0).round() / 10.0,
            expected_delay_minutes: outcome.expected_delay_minutes,
            risk_level,
            risk_text: risk_level.text().to_string(),
            delay_risk_level: RiskLevel::from_delay_minutes(outcome.expected_delay_minutes),
            attributions,
            route,
            metadata: AssessmentMetadata {
                schema: schema.tag().to_string(),
                weather_used: weather.is_some() && self.config.include_weather,
                regression_applied: outcome.regression_applied,
                processing_time_ms,
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        })
    }
}
