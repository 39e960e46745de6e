//! Route geometry
//!
//! Great-circle distance between airports and a coarse scheduled-duration
//! heuristic. The distance feeds the feature vector; both values are also
//! exposed directly for route display without running a full prediction.

use serde::{Deserialize, Serialize};

use crate::error::AssessError;
use crate::features::encoding::Encodings;

/// Earth radius in statute miles
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Assumed average cruise speed in mph for the duration heuristic
const CRUISE_SPEED_MPH: f64 = 500.0;

/// Fixed taxi/climb/descent overhead in minutes
const GROUND_OVERHEAD_MINUTES: f64 = 30.0;

/// Great-circle distance between two points, in statute miles
///
/// Standard haversine formula. Symmetric, and zero for identical points.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Coarse flight duration estimate in minutes
///
/// Linear heuristic: cruise at 500 mph plus a fixed 30-minute ground and
/// climb overhead. Display-only; the trained models consume the scheduled
/// elapsed time field instead.
pub fn estimate_duration_minutes(distance_miles: f64) -> f64 {
    (distance_miles / CRUISE_SPEED_MPH * 60.0 + GROUND_OVERHEAD_MINUTES).round()
}

/// Display-ready route information
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    /// Great-circle distance in statute miles
    pub distance_miles: f64,

    /// Estimated gate-to-gate duration in minutes
    pub estimated_duration_minutes: f64,
}

/// Route information for a pair of airport codes
///
/// # Errors
///
/// Returns `AssessError::UnknownCategory` when either code is absent from
/// the encoding table.
pub fn route_info(origin: &str, destination: &str) -> Result<RouteInfo, AssessError> {
    route_info_with(&Encodings::standard(), origin, destination)
}

/// Route information resolved against a specific encoding table
pub fn route_info_with(
    encodings: &Encodings,
    origin: &str,
    destination: &str,
) -> Result<RouteInfo, AssessError> {
    let from = encodings
        .airport(origin)
        .ok_or_else(|| AssessError::UnknownCategory(format!("airport {}", origin)))?;
    let to = encodings
        .airport(destination)
        .ok_or_else(|| AssessError::UnknownCategory(format!("airport {}", destination)))?;

    let distance_miles = haversine_distance(from.lat, from.lon, to.lat, to.lon);
    Ok(RouteInfo {
        distance_miles,
        estimated_duration_minutes: estimate_duration_minutes(distance_miles),
    })
}
