//! Weather risk scoring
//!
//! Pure functions turning raw surface observations into bounded 0-10 risk
//! scores, a weighted composite per location, and cross-location
//! differentials. Thresholds are fixed domain knowledge (aviation
//! wind-operation and precipitation minimums), not tunable per request.
//!
//! Absent observation fields are "unknown" and score 0 for the affected
//! component; no function here can fail.
//!
//! # Example
//!
//! ```
//! use delaycast::features::weather_risk::{wind_risk, composite_risk};
//!
//! assert_eq!(wind_risk(30.0), 4.0);
//! let composite = composite_risk(4.0, 10.0, 8.0, 5.0);
//! assert!(composite <= 10.0);
//! ```

use crate::input::weather::{RouteObservations, WeatherObservation};

/// Composite weighting: wind
const WIND_WEIGHT: f64 = 0.30;
/// Composite weighting: precipitation (weighted highest)
const PRECIP_WEIGHT: f64 = 0.35;
/// Composite weighting: temperature
const TEMP_WEIGHT: f64 = 0.20;
/// Composite weighting: humidity
const HUMIDITY_WEIGHT: f64 = 0.15;

/// Wind risk score in [0, 10]
///
/// Piecewise step function over sustained wind speed, closed-open
/// intervals: `[28, 46)` scores 4, `[46, 65)` scores 7, `>= 65` scores 10.
pub fn wind_risk(speed_kmh: f64) -> f64 {
    if speed_kmh >= 65.0 {
        10.0
    } else if speed_kmh >= 46.0 {
        7.0
    } else if speed_kmh >= 28.0 {
        4.0
    } else {
        0.0
    }
}

/// Precipitation risk score in [0, 10]
///
/// Magnitude is bucketed as light (<2.5 mm), moderate (<7.6 mm), or heavy
/// (>= 7.6 mm); severity doubles when precipitation is frozen, where
/// frozen means temperature below 2 degrees C or any snow on the ground.
/// Unknown temperature or snow depth simply cannot prove frozen
/// conditions.
pub fn precip_risk(precip_mm: f64, temp_c: Option<f64>, snow_depth_mm: Option<f64>) -> f64 {
    if precip_mm <= 0.0 {
        return 0.0;
    }

    let frozen = temp_c.map_or(false, |t| t < 2.0) || snow_depth_mm.map_or(false, |s| s > 0.0);

    if precip_mm < 2.5 {
        if frozen {
            5.0
        } else {
            2.0
        }
    } else if precip_mm < 7.6 {
        if frozen {
            8.0
        } else {
            5.0
        }
    } else if frozen {
        10.0
    } else {
        7.0
    }
}

/// Temperature risk score in [0, 10]
///
/// 0 inside the benign band [-5, 30]. Outside it, the extreme bounds
/// (<-18 or >40) are checked before the moderate bounds (<0 or >35) so a
/// value satisfying both ranges lands in the higher bucket.
pub fn temp_risk(temp_c: f64) -> f64 {
    if (-5.0..=30.0).contains(&temp_c) {
        0.0
    } else if temp_c < -18.0 || temp_c > 40.0 {
        8.0
    } else if temp_c < 0.0 || temp_c > 35.0 {
        5.0
    } else {
        2.0
    }
}

/// Humidity risk score in [0, 10]
///
/// High humidity matters most near freezing (fog and icing conditions);
/// unknown temperature takes the milder branch.
pub fn humidity_risk(humidity_pct: f64, temp_c: Option<f64>) -> f64 {
    if humidity_pct < 70.0 {
        return 0.0;
    }
    let cold = temp_c.map_or(false, |t| t < 5.0);
    if humidity_pct >= 90.0 {
        if cold {
            8.0
        } else {
            5.0
        }
    } else if humidity_pct >= 85.0 {
        if cold {
            5.0
        } else {
            3.0
        }
    } else {
        1.0
    }
}

/// Weighted composite of the four component scores, clamped to [0, 10]
///
/// Weights sum to 1.0 with precipitation weighted highest.
pub fn composite_risk(wind: f64, precip: f64, temp: f64, humidity: f64) -> f64 {
    let score = WIND_WEIGHT * wind
        + PRECIP_WEIGHT * precip
        + TEMP_WEIGHT * temp
        + HUMIDITY_WEIGHT * humidity;
    score.clamp(0.0, 10.0)
}

/// Derived risk scores for one location
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocationRisk {
    /// Wind component score (0-10)
    pub wind: f64,
    /// Precipitation component score (0-10)
    pub precip: f64,
    /// Temperature component score (0-10)
    pub temperature: f64,
    /// Humidity component score (0-10)
    pub humidity: f64,
    /// Weighted composite score (0-10)
    pub composite: f64,
}

impl LocationRisk {
    /// Score a single observation; absent fields contribute zero risk
    pub fn from_observation(obs: &WeatherObservation) -> Self {
        let wind = obs.wind_speed_kmh.map_or(0.0, wind_risk);
        let precip = obs
            .precip_mm
            .map_or(0.0, |p| precip_risk(p, obs.temperature_c, obs.snow_depth_mm));
        let temperature = obs.temperature_c.map_or(0.0, temp_risk);
        let humidity = obs
            .humidity_pct
            .map_or(0.0, |h| humidity_risk(h, obs.temperature_c));

        Self {
            wind,
            precip,
            temperature,
            humidity,
            composite: composite_risk(wind, precip, temperature, humidity),
        }
    }
}

/// Derived weather risk for a whole route
///
/// Per-location scores plus cross-location differentials and the signed
/// "deteriorating weather" signal (destination composite minus origin
/// composite). Computed fresh per request, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteWeatherRisk {
    /// Scores at the origin airport
    pub origin: LocationRisk,
    /// Scores at the destination airport
    pub destination: LocationRisk,
    /// |destination - origin| temperature difference (degrees C)
    pub temp_diff: f64,
    /// |destination - origin| humidity difference (percentage points)
    pub humidity_diff: f64,
    /// |destination - origin| pressure difference (hPa)
    pub pressure_diff: f64,
    /// |destination - origin| wind gust difference (km/h)
    pub gust_diff: f64,
    /// Signed destination composite minus origin composite
    pub deteriorating: f64,
}

impl RouteWeatherRisk {
    /// Score both ends of a route
    pub fn from_observations(obs: &RouteObservations) -> Self {
        let origin = LocationRisk::from_observation(&obs.origin);
        let destination = LocationRisk::from_observation(&obs.destination);

        Self {
            origin,
            destination,
            temp_diff: abs_diff(obs.origin.temperature_c, obs.destination.temperature_c),
            humidity_diff: abs_diff(obs.origin.humidity_pct, obs.destination.humidity_pct),
            pressure_diff: abs_diff(obs.origin.pressure_hpa, obs.destination.pressure_hpa),
            gust_diff: abs_diff(obs.origin.wind_gust_kmh, obs.destination.wind_gust_kmh),
            deteriorating: destination.composite - origin.composite,
        }
    }
}

/// Absolute difference of two readings; unknown on either side is neutral
fn abs_diff(a: Option<f64>, b: Option<f64>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => (b - a).abs(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_risk_boundaries_take_upper_bucket() {
        // Closed-open intervals: the boundary value belongs to the bucket above
        assert_eq!(wind_risk(27.9), 0.0);
        assert_eq!(wind_risk(28.0), 4.0);
        assert_eq!(wind_risk(45.9), 4.0);
        assert_eq!(wind_risk(46.0), 7.0);
        assert_eq!(wind_risk(64.9), 7.0);
        assert_eq!(wind_risk(65.0), 10.0);
        assert_eq!(wind_risk(120.0), 10.0);
    }

    #[test]
    fn test_precip_risk_table() {
        // No precipitation is always zero, even when frozen
        assert_eq!(precip_risk(0.0, Some(-10.0), Some(50.0)), 0.0);

        // Not frozen: light / moderate / heavy
        assert_eq!(precip_risk(1.0, Some(15.0), Some(0.0)), 2.0);
        assert_eq!(precip_risk(5.0, Some(15.0), Some(0.0)), 5.0);
        assert_eq!(precip_risk(10.0, Some(15.0), Some(0.0)), 7.0);

        // Frozen by temperature
        assert_eq!(precip_risk(1.0, Some(1.0), Some(0.0)), 5.0);
        assert_eq!(precip_risk(5.0, Some(-3.0), Some(0.0)), 8.0);
        assert_eq!(precip_risk(10.0, Some(-3.0), Some(0.0)), 10.0);

        // Frozen by snow on the ground alone
        assert_eq!(precip_risk(1.0, Some(4.0), Some(10.0)), 5.0);

        // Magnitude boundaries
        assert_eq!(precip_risk(2.5, Some(15.0), None), 5.0);
        assert_eq!(precip_risk(7.6, Some(15.0), None), 7.0);
    }

    #[test]
    fn test_precip_risk_unknown_fields_cannot_prove_frozen() {
        assert_eq!(precip_risk(10.0, None, None), 7.0);
    }

    #[test]
    fn test_temp_risk_extreme_bound_checked_first() {
        assert_eq!(temp_risk(20.0), 0.0);
        assert_eq!(temp_risk(-5.0), 0.0);
        assert_eq!(temp_risk(30.0), 0.0);

        // -20 satisfies both <0 and <-18; it must land in the 8 bucket
        assert_eq!(temp_risk(-20.0), 8.0);
        assert_eq!(temp_risk(45.0), 8.0);

        assert_eq!(temp_risk(-10.0), 5.0);
        assert_eq!(temp_risk(38.0), 5.0);

        assert_eq!(temp_risk(33.0), 2.0);
    }

    #[test]
    fn test_humidity_risk_branches() {
        assert_eq!(humidity_risk(50.0, Some(0.0)), 0.0);
        assert_eq!(humidity_risk(75.0, Some(20.0)), 1.0);
        assert_eq!(humidity_risk(87.0, Some(20.0)), 3.0);
        assert_eq!(humidity_risk(87.0, Some(2.0)), 5.0);
        assert_eq!(humidity_risk(95.0, Some(20.0)), 5.0);
        assert_eq!(humidity_risk(95.0, Some(2.0)), 8.0);

        // Unknown temperature takes the milder branch
        assert_eq!(humidity_risk(95.0, None), 5.0);
    }

    #[test]
    fn test_composite_risk_bounded() {
        assert_eq!(composite_risk(0.0, 0.0, 0.0, 0.0), 0.0);

        // Weights sum to 1.0, so all-max components stay at the ceiling
        assert!((composite_risk(10.0, 10.0, 10.0, 10.0) - 10.0).abs() < 1e-9);

        // Spot check the weighting
        let c = composite_risk(4.0, 10.0, 8.0, 5.0);
        assert!((c - (0.30 * 4.0 + 0.35 * 10.0 + 0.20 * 8.0 + 0.15 * 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_missing_fields_score_zero() {
        let risk = LocationRisk::from_observation(&WeatherObservation::default());
        assert_eq!(risk, LocationRisk::default());
    }

    #[test]
    fn test_extreme_winter_composite() {
        // Origin at -20 C with 10 mm precipitation over 5 mm of snow:
        // temp 8, precip 10 (frozen, heavy), composite >= 8 after weighting
        // with the humidity term at its typical winter reading.
        let obs = WeatherObservation {
            temperature_c: Some(-20.0),
            humidity_pct: Some(92.0),
            precip_mm: Some(10.0),
            snow_depth_mm: Some(5.0),
            wind_speed_kmh: Some(50.0),
            ..WeatherObservation::default()
        };
        let risk = LocationRisk::from_observation(&obs);
        assert_eq!(risk.temperature, 8.0);
        assert_eq!(risk.precip, 10.0);
        assert_eq!(risk.wind, 7.0);
        assert_eq!(risk.humidity, 8.0);
        assert!(risk.composite >= 8.0, "composite {} < 8", risk.composite);
    }

    #[test]
    fn test_deteriorating_signal_is_signed() {
        let obs = RouteObservations {
            origin: WeatherObservation {
                wind_speed_kmh: Some(70.0),
                ..WeatherObservation::default()
            },
            destination: WeatherObservation::default(),
        };
        let risk = RouteWeatherRisk::from_observations(&obs);
        assert!(risk.deteriorating < 0.0, "improving weather must be negative");

        let obs = RouteObservations {
            origin: WeatherObservation::default(),
            destination: WeatherObservation {
                wind_speed_kmh: Some(70.0),
                ..WeatherObservation::default()
            },
        };
        let risk = RouteWeatherRisk::from_observations(&obs);
        assert!(risk.deteriorating > 0.0);
    }

    #[test]
    fn test_differentials_neutral_when_either_side_unknown() {
        let obs = RouteObservations {
            origin: WeatherObservation {
                temperature_c: Some(10.0),
                ..WeatherObservation::default()
            },
            destination: WeatherObservation::default(),
        };
        let risk = RouteWeatherRisk::from_observations(&obs);
        assert_eq!(risk.temp_diff, 0.0);
        assert_eq!(risk.pressure_diff, 0.0);
    }

    #[test]
    fn test_differentials_absolute() {
        let obs = RouteObservations {
            origin: WeatherObservation {
                temperature_c: Some(25.0),
                pressure_hpa: Some(1020.0),
                ..WeatherObservation::default()
            },
            destination: WeatherObservation {
                temperature_c: Some(10.0),
                pressure_hpa: Some(1005.0),
                ..WeatherObservation::default()
            },
        };
        let risk = RouteWeatherRisk::from_observations(&obs);
        assert_eq!(risk.temp_diff, 15.0);
        assert_eq!(risk.pressure_diff, 15.0);
    }
}
