//! Feature vector schema and assembly
//!
//! The trained models consume a fixed-order numeric vector. Feature order
//! and categorical encoding must exactly match what the offline training
//! pipeline produced, or scores are meaningless; schemas are therefore
//! version-tagged and the order below is frozen per tag.

use serde::{Deserialize, Serialize};

use crate::error::AssessError;
use crate::features::encoding::Encodings;
use crate::features::route::haversine_distance;
use crate::features::weather_risk::RouteWeatherRisk;
use crate::input::itinerary::ItineraryRequest;
use crate::input::weather::RouteObservations;

/// Every feature the models can consume
///
/// `key()` returns the training-time column name; the serving layer and
/// the attribution ranker both key off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Month of travel (1-12)
    Month,
    /// Calendar quarter (1-4)
    Quarter,
    /// Day of month (1-31)
    DayOfMonth,
    /// Day of week (1 = Monday .. 7 = Sunday)
    DayOfWeek,
    /// Encoded airline index
    Airline,
    /// Encoded origin airport index
    Origin,
    /// Encoded destination airport index
    Dest,
    /// Great-circle distance in miles
    Distance,
    /// Scheduled elapsed time in minutes
    ElapsedTime,
    /// Departure hour (0-23)
    DepHour,
    /// Arrival hour (0-23)
    ArrHour,
    /// Departure day-period bucket (1-5)
    DepTimeCategory,
    /// Origin wind risk (0-10)
    OriginWindRisk,
    /// Origin precipitation risk (0-10)
    OriginPrecipRisk,
    /// Origin temperature risk (0-10)
    OriginTempRisk,
    /// Origin humidity risk (0-10)
    OriginHumidityRisk,
    /// Origin composite weather risk (0-10)
    OriginCompositeRisk,
    /// Destination wind risk (0-10)
    DestWindRisk,
    /// Destination precipitation risk (0-10)
    DestPrecipRisk,
    /// Destination temperature risk (0-10)
    DestTempRisk,
    /// Destination humidity risk (0-10)
    DestHumidityRisk,
    /// Destination composite weather risk (0-10)
    DestCompositeRisk,
    /// Absolute route temperature differential
    TempDiff,
    /// Absolute route humidity differential
    HumidityDiff,
    /// Absolute route pressure differential
    PressureDiff,
    /// Absolute route wind-gust differential
    GustDiff,
    /// Signed destination-minus-origin composite risk
    Deteriorating,
}

impl Feature {
    /// Training-time column name
    pub fn key(&self) -> &'static str {
        match self {
            Feature::Month => "Month",
            Feature::Quarter => "Quarter",
            Feature::DayOfMonth => "DayofMonth",
            Feature::DayOfWeek => "DayOfWeek",
            Feature::Airline => "Reporting_Airline_encoded",
            Feature::Origin => "Origin_encoded",
            Feature::Dest => "Dest_encoded",
            Feature::Distance => "Distance",
            Feature::ElapsedTime => "CRSElapsedTime",
            Feature::DepHour => "dep_hour",
            Feature::ArrHour => "arr_hour",
            Feature::DepTimeCategory => "dep_time_category",
            Feature::OriginWindRisk => "origin_wind_risk",
            Feature::OriginPrecipRisk => "origin_precip_risk",
            Feature::OriginTempRisk => "origin_temp_risk",
            Feature::OriginHumidityRisk => "origin_humidity_risk",
            Feature::OriginCompositeRisk => "origin_composite_risk",
            Feature::DestWindRisk => "dest_wind_risk",
            Feature::DestPrecipRisk => "dest_precip_risk",
            Feature::DestTempRisk => "dest_temp_risk",
            Feature::DestHumidityRisk => "dest_humidity_risk",
            Feature::DestCompositeRisk => "dest_composite_risk",
            Feature::TempDiff => "route_temp_diff",
            Feature::HumidityDiff => "route_humidity_diff",
            Feature::PressureDiff => "route_pressure_diff",
            Feature::GustDiff => "route_gust_diff",
            Feature::Deteriorating => "route_deteriorating",
        }
    }

    /// Human display name for attribution rendering
    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::Month => "Month",
            Feature::Quarter => "Quarter",
            Feature::DayOfMonth => "Day of Month",
            Feature::DayOfWeek => "Day of Week",
            Feature::Airline => "Airline",
            Feature::Origin => "Origin Airport",
            Feature::Dest => "Destination",
            Feature::Distance => "Flight Distance",
            Feature::ElapsedTime => "Flight Duration",
            Feature::DepHour => "Departure Hour",
            Feature::ArrHour => "Arrival Hour",
            Feature::DepTimeCategory => "Time of Day",
            Feature::OriginWindRisk => "Origin Wind",
            Feature::OriginPrecipRisk => "Origin Precipitation",
            Feature::OriginTempRisk => "Origin Temperature",
            Feature::OriginHumidityRisk => "Origin Humidity",
            Feature::OriginCompositeRisk => "Origin Weather",
            Feature::DestWindRisk => "Destination Wind",
            Feature::DestPrecipRisk => "Destination Precipitation",
            Feature::DestTempRisk => "Destination Temperature",
            Feature::DestHumidityRisk => "Destination Humidity",
            Feature::DestCompositeRisk => "Destination Weather",
            Feature::TempDiff => "Temperature Change",
            Feature::HumidityDiff => "Humidity Change",
            Feature::PressureDiff => "Pressure Change",
            Feature::GustDiff => "Gust Change",
            Feature::Deteriorating => "Weather Trend",
        }
    }
}

/// Base block: the 12 features the original model was trained on, in
/// training order. Frozen.
const BASE_FEATURES: [Feature; 12] = [
    Feature::Month,
    Feature::Quarter,
    Feature::DayOfMonth,
    Feature::DayOfWeek,
    Feature::Airline,
    Feature::Origin,
    Feature::Dest,
    Feature::Distance,
    Feature::ElapsedTime,
    Feature::DepHour,
    Feature::ArrHour,
    Feature::DepTimeCategory,
];

/// Weather-extended schema: the base block plus 15 derived weather
/// features, in this order. Frozen.
const WEATHER_FEATURES: [Feature; 27] = [
    Feature::Month,
    Feature::Quarter,
    Feature::DayOfMonth,
    Feature::DayOfWeek,
    Feature::Airline,
    Feature::Origin,
    Feature::Dest,
    Feature::Distance,
    Feature::ElapsedTime,
    Feature::DepHour,
    Feature::ArrHour,
    Feature::DepTimeCategory,
    Feature::OriginWindRisk,
    Feature::OriginPrecipRisk,
    Feature::OriginTempRisk,
    Feature::OriginHumidityRisk,
    Feature::OriginCompositeRisk,
    Feature::DestWindRisk,
    Feature::DestPrecipRisk,
    Feature::DestTempRisk,
    Feature::DestHumidityRisk,
    Feature::DestCompositeRisk,
    Feature::TempDiff,
    Feature::HumidityDiff,
    Feature::PressureDiff,
    Feature::GustDiff,
    Feature::Deteriorating,
];

/// Version-tagged feature layout
///
/// A schema fixes vector length and feature order. Training a model
/// against a different layout requires a new tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureSchema {
    /// 12 base itinerary features
    BaseV1,
    /// Base features plus the 15-feature weather block
    WeatherV1,
}

impl FeatureSchema {
    /// Schema version tag
    pub fn tag(&self) -> &'static str {
        match self {
            FeatureSchema::BaseV1 => "base-v1",
            FeatureSchema::WeatherV1 => "weather-v1",
        }
    }

    /// Ordered feature list for this schema
    pub fn features(&self) -> &'static [Feature] {
        match self {
            FeatureSchema::BaseV1 => &BASE_FEATURES,
            FeatureSchema::WeatherV1 => &WEATHER_FEATURES,
        }
    }

    /// Vector length for this schema
    pub fn len(&self) -> usize {
        self.features().len()
    }

    /// Always false; schemas are never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of a feature within this schema, if present
    pub fn index_of(&self, feature: Feature) -> Option<usize> {
        self.features().iter().position(|&f| f == feature)
    }
}

/// A model-ready feature vector
///
/// Values are stored in schema order; `get` resolves a feature through the
/// schema so callers never hardcode positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    schema: FeatureSchema,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Schema this vector was built against
    pub fn schema(&self) -> FeatureSchema {
        self.schema
    }

    /// Value of a feature, if the schema contains it
    pub fn get(&self, feature: Feature) -> Option<f64> {
        self.schema.index_of(feature).map(|i| self.values[i])
    }

    /// Raw values in schema order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the vector holds no values (never, for built vectors)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Departure day-period bucket
///
/// 1 = early morning (5-8h), 2 = morning (9-11h), 3 = afternoon (12-16h),
/// 4 = evening (17-20h), 5 = night. Matches the bucketing used at
/// training time.
pub fn dep_time_category(hour: u32) -> u32 {
    match hour {
        5..=8 => 1,
        9..=11 => 2,
        12..=16 => 3,
        17..=20 => 4,
        _ => 5,
    }
}

/// Scheduled elapsed time in minutes from departure and arrival hours
///
/// Wraps past midnight and floors at 60 minutes; only hours are known, so
/// this is a coarse schedule estimate, exactly as at training time.
pub fn scheduled_elapsed_minutes(dep_hour: u32, arr_hour: u32) -> f64 {
    let mut elapsed = (arr_hour as i64 - dep_hour as i64) * 60;
    if elapsed < 0 {
        elapsed += 24 * 60;
    }
    elapsed.max(60) as f64
}

/// Assembles feature vectors for one schema against one encoding table
#[derive(Debug, Clone, Copy)]
pub struct FeatureVectorBuilder {
    encodings: Encodings,
    schema: FeatureSchema,
}

impl FeatureVectorBuilder {
    /// Create a builder for the given encodings and schema
    pub fn new(encodings: Encodings, schema: FeatureSchema) -> Self {
        Self { encodings, schema }
    }

    /// Build the ordered vector for a request
    ///
    /// Weather observations are optional: with a weather schema and no
    /// observations, the weather block is zeroed so vector length stays
    /// constant. Deterministic for identical inputs.
    ///
    /// # Errors
    ///
    /// `MalformedRequest` for out-of-range fields, `UnknownCategory` for
    /// codes absent from the encoding table.
    pub fn build(
        &self,
        request: &ItineraryRequest,
        weather: Option<&RouteObservations>,
    ) -> Result<FeatureVector, AssessError> {
        request.validate()?;

        let (origin_idx, origin) = self
            .encodings
            .airport_entry(&request.origin)
            .ok_or_else(|| AssessError::UnknownCategory(format!("airport {}", request.origin)))?;
        let (dest_idx, dest) = self.encodings.airport_entry(&request.destination).ok_or_else(
            || AssessError::UnknownCategory(format!("airport {}", request.destination)),
        )?;
        let airline_idx = self
            .encodings
            .airline_index(&request.airline)
            .ok_or_else(|| AssessError::UnknownCategory(format!("airline {}", request.airline)))?;

        let distance = haversine_distance(origin.lat, origin.lon, dest.lat, dest.lon);
        let quarter = (request.month - 1) / 3 + 1;

        let mut values = Vec::with_capacity(self.schema.len());
        values.extend_from_slice(&[
            request.month as f64,
            quarter as f64,
            request.day_of_month as f64,
            request.day_of_week as f64,
            airline_idx as f64,
            origin_idx as f64,
            dest_idx as f64,
            distance,
            scheduled_elapsed_minutes(request.dep_hour, request.arr_hour),
            request.dep_hour as f64,
            request.arr_hour as f64,
            dep_time_category(request.dep_hour) as f64,
        ]);

        if self.schema == FeatureSchema::WeatherV1 {
            // Neutral zeros when no observations are supplied; the block is
            // always present so the length matches the trained schema.
            let risk = weather.map(RouteWeatherRisk::from_observations).unwrap_or_default();
            values.extend_from_slice(&[
                risk.origin.wind,
                risk.origin.precip,
                risk.origin.temperature,
                risk.origin.humidity,
                risk.origin.composite,
                risk.destination.wind,
                risk.destination.precip,
                risk.destination.temperature,
                risk.destination.humidity,
                risk.destination.composite,
                risk.temp_diff,
                risk.humidity_diff,
                risk.pressure_diff,
                risk.gust_diff,
                risk.deteriorating,
            ]);
        } else if weather.is_some() {
            log::debug!("weather observations supplied but schema {} ignores them", self.schema.tag());
        }

        debug_assert_eq!(values.len(), self.schema.len());
        log::debug!(
            "built {} feature vector for {}-{} ({} features)",
            self.schema.tag(),
            request.origin,
            request.destination,
            values.len()
        );

        Ok(FeatureVector {
            schema: self.schema,
            values,
        })
    }
}
