//! Heuristic baseline scorers
//!
//! Pattern-based scoring functions used when no trained artifact is
//! available. They encode well-known delay drivers (evening rush,
//! Friday/Sunday travel, summer and December peaks, congested hub
//! airports, carrier punctuality) as additive adjustments on a base rate,
//! and mirror those adjustments in the explanation step so attribution
//! stays consistent with the score. Fully deterministic; any trained model
//! meeting the same contracts can replace them.

use crate::error::AssessError;
use crate::features::encoding::Encodings;
use crate::features::vector::{Feature, FeatureSchema, FeatureVector};
use crate::ml::{DelayClassifier, DelayRegressor};

/// System-wide base delay rate
const BASE_PROBABILITY: f64 = 0.22;

/// Probability floor and ceiling for the heuristic
const MIN_PROBABILITY: f64 = 0.05;
const MAX_PROBABILITY: f64 = 0.85;

/// Large hubs with chronic congestion
const HUB_AIRPORTS: [&str; 10] = [
    "ATL", "ORD", "DFW", "DEN", "LAX", "JFK", "SFO", "EWR", "LGA", "PHL",
];

/// Hubs with notably poor on-time performance
const PROBLEMATIC_AIRPORTS: [&str; 5] = ["EWR", "LGA", "JFK", "SFO", "ORD"];

/// Per-unit probability contribution of the composite weather scores
const ORIGIN_WEATHER_FACTOR: f64 = 0.015;
const DEST_WEATHER_FACTOR: f64 = 0.010;
const DETERIORATING_FACTOR: f64 = 0.010;

fn day_of_week_effect(day: u32) -> f64 {
    match day {
        1 => -0.02,
        2 => -0.03,
        3 => -0.02,
        4 => 0.01,
        5 => 0.06,
        6 => 0.03,
        7 => 0.05,
        _ => 0.0,
    }
}

fn airline_effect(code: &str) -> f64 {
    match code {
        "AA" => 0.02,
        "DL" => -0.05,
        "UA" => 0.03,
        "WN" => 0.01,
        "B6" => 0.04,
        "AS" => -0.04,
        "NK" => 0.12,
        "F9" => 0.10,
        _ => 0.0,
    }
}

/// Required feature lookup; a schema without it is a contract violation
fn value(features: &FeatureVector, feature: Feature) -> Result<f64, AssessError> {
    features.get(feature).ok_or_else(|| {
        AssessError::PredictionFailed(format!(
            "feature {} missing from schema {}",
            feature.key(),
            features.schema().tag()
        ))
    })
}

/// Decode the airport code behind an encoded index
fn airport_code(encodings: &Encodings, index: f64) -> Result<&'static str, AssessError> {
    encodings
        .airport_at(index as u32)
        .map(|a| a.code)
        .ok_or_else(|| {
            AssessError::PredictionFailed(format!("airport index {} out of table range", index))
        })
}

/// Additive pattern score shared by the classifier and the regressor
fn pattern_probability(
    encodings: &Encodings,
    features: &FeatureVector,
) -> Result<f64, AssessError> {
    let mut probability = BASE_PROBABILITY;

    let dep_hour = value(features, Feature::DepHour)? as u32;
    probability += match dep_hour {
        16..=20 => 0.12,
        6..=9 => 0.04,
        0..=5 => -0.06,
        _ => 0.0,
    };

    probability += day_of_week_effect(value(features, Feature::DayOfWeek)? as u32);

    let month = value(features, Feature::Month)? as u32;
    probability += match month {
        6..=8 => 0.08,
        12 => 0.08,
        9 | 10 => -0.04,
        _ => 0.0,
    };

    let distance = value(features, Feature::Distance)?;
    probability += if distance > 2000.0 {
        0.06
    } else if distance > 1000.0 {
        0.03
    } else if distance < 500.0 {
        -0.02
    } else {
        0.0
    };

    let origin = airport_code(encodings, value(features, Feature::Origin)?)?;
    let dest = airport_code(encodings, value(features, Feature::Dest)?)?;
    if HUB_AIRPORTS.contains(&origin) {
        probability += 0.05;
    }
    if HUB_AIRPORTS.contains(&dest) {
        probability += 0.04;
    }
    if PROBLEMATIC_AIRPORTS.contains(&origin) {
        probability += 0.06;
    }
    if PROBLEMATIC_AIRPORTS.contains(&dest) {
        probability += 0.05;
    }

    let airline_index = value(features, Feature::Airline)? as u32;
    if let Some(airline) = encodings.airline_at(airline_index) {
        probability += airline_effect(airline.code);
    }

    // Weather block, when the schema carries it
    probability += ORIGIN_WEATHER_FACTOR
        * features.get(Feature::OriginCompositeRisk).unwrap_or(0.0);
    probability += DEST_WEATHER_FACTOR * features.get(Feature::DestCompositeRisk).unwrap_or(0.0);
    probability += DETERIORATING_FACTOR * features.get(Feature::Deteriorating).unwrap_or(0.0);

    Ok(probability.clamp(MIN_PROBABILITY, MAX_PROBABILITY))
}

/// Pattern-based delay classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier {
    encodings: Encodings,
}

impl HeuristicClassifier {
    /// Classifier resolving encoded categories through `encodings`
    pub fn new(encodings: Encodings) -> Self {
        Self { encodings }
    }
}

impl DelayClassifier for HeuristicClassifier {
    fn score(&self, features: &FeatureVector) -> Result<f64, AssessError> {
        pattern_probability(&self.encodings, features)
    }

    fn explain(&self, features: &FeatureVector) -> Result<Vec<(Feature, f64)>, AssessError> {
        let mut contributions = Vec::with_capacity(11);

        let dep_hour = value(features, Feature::DepHour)? as u32;
        contributions.push((
            Feature::DepHour,
            match dep_hour {
                16..=20 => 0.10,
                6..=9 => 0.04,
                0..=5 => -0.06,
                _ => 0.01,
            },
        ));

        contributions.push((
            Feature::DayOfWeek,
            day_of_week_effect(value(features, Feature::DayOfWeek)? as u32),
        ));

        let month = value(features, Feature::Month)? as u32;
        contributions.push((
            Feature::Month,
            match month {
                6..=8 => 0.07,
                12 => 0.08,
                9 | 10 => -0.04,
                _ => 0.01,
            },
        ));

        let distance = value(features, Feature::Distance)?;
        contributions.push((
            Feature::Distance,
            if distance > 2000.0 {
                0.05
            } else if distance > 1000.0 {
                0.02
            } else {
                -0.02
            },
        ));

        let origin = airport_code(&self.encodings, value(features, Feature::Origin)?)?;
        contributions.push((
            Feature::Origin,
            if HUB_AIRPORTS.contains(&origin) { 0.06 } else { -0.02 },
        ));

        let dest = airport_code(&self.encodings, value(features, Feature::Dest)?)?;
        contributions.push((
            Feature::Dest,
            if HUB_AIRPORTS.contains(&dest) { 0.05 } else { -0.02 },
        ));

        let airline_index = value(features, Feature::Airline)? as u32;
        let airline = self
            .encodings
            .airline_at(airline_index)
            .map(|a| a.code)
            .unwrap_or("");
        contributions.push((Feature::Airline, airline_effect(airline)));

        let time_category = value(features, Feature::DepTimeCategory)? as u32;
        contributions.push((
            Feature::DepTimeCategory,
            match time_category {
                1 => -0.04,
                2 => -0.02,
                3 => 0.01,
                4 => 0.08,
                _ => 0.02,
            },
        ));

        if features.schema() == FeatureSchema::WeatherV1 {
            contributions.push((
                Feature::OriginCompositeRisk,
                ORIGIN_WEATHER_FACTOR
                    * features.get(Feature::OriginCompositeRisk).unwrap_or(0.0),
            ));
            contributions.push((
                Feature::DestCompositeRisk,
                DEST_WEATHER_FACTOR * features.get(Feature::DestCompositeRisk).unwrap_or(0.0),
            ));
            contributions.push((
                Feature::Deteriorating,
                DETERIORATING_FACTOR * features.get(Feature::Deteriorating).unwrap_or(0.0),
            ));
        }

        Ok(contributions)
    }
}

/// Pattern-based delay duration regressor
///
/// Shapes the conditional estimate as a 15-minute floor (a delay is only
/// counted from 15 minutes) plus the pattern severity and a long-haul
/// recovery term.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicRegressor {
    encodings: Encodings,
}

impl HeuristicRegressor {
    /// Regressor resolving encoded categories through `encodings`
    pub fn new(encodings: Encodings) -> Self {
        Self { encodings }
    }
}

impl DelayRegressor for HeuristicRegressor {
    fn score(&self, features: &FeatureVector) -> Result<f64, AssessError> {
        let severity = pattern_probability(&self.encodings, features)?;
        let distance = value(features, Feature::Distance)?;
        let long_haul = (distance / 3000.0).min(1.0) * 20.0;
        Ok(15.0 + severity * 60.0 + long_haul)
    }
}
