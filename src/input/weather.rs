//! Weather observation types
//!
//! Observations arrive already materialized (no I/O here). Every field is
//! optional: an absent reading is "unknown" and contributes zero risk, it
//! never fails the request.

use serde::{Deserialize, Serialize};

/// A single surface weather observation at an airport
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature in degrees Celsius
    pub temperature_c: Option<f64>,

    /// Dew point in degrees Celsius
    pub dew_point_c: Option<f64>,

    /// Relative humidity in percent (0-100)
    pub humidity_pct: Option<f64>,

    /// Precipitation in millimetres (>= 0)
    pub precip_mm: Option<f64>,

    /// Snow depth in millimetres (>= 0)
    pub snow_depth_mm: Option<f64>,

    /// Sustained wind speed in km/h (>= 0)
    pub wind_speed_kmh: Option<f64>,

    /// Wind gust speed in km/h (>= 0)
    pub wind_gust_kmh: Option<f64>,

    /// Sea-level pressure in hPa
    pub pressure_hpa: Option<f64>,

    /// Provider condition code
    pub condition_code: Option<i32>,
}

/// Observations for both ends of a route
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteObservations {
    /// Observation at the origin airport
    pub origin: WeatherObservation,

    /// Observation at the destination airport
    pub destination: WeatherObservation,
}
