//! Risk-level bucketing
//!
//! Discrete risk levels derived from the delay probability and, for the
//! duration display only, from the expected delay minutes. The duration
//! bucket never feeds back into the probability bucket.

use serde::{Deserialize, Serialize};

/// Probability at which risk stops being low
pub const MEDIUM_PROBABILITY: f64 = 0.33;

/// Probability at which risk becomes high
pub const HIGH_PROBABILITY: f64 = 0.66;

/// Delay minutes at which the duration display stops being low
pub const MEDIUM_DELAY_MINUTES: f64 = 30.0;

/// Delay minutes at which the duration display becomes high
pub const HIGH_DELAY_MINUTES: f64 = 60.0;

/// Discrete risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Probability below 33%, or delay at most 30 minutes
    Low,
    /// Probability in [33%, 66%), or delay in (30, 60] minutes
    Medium,
    /// Probability at or above 66%, or delay above 60 minutes
    High,
}

impl RiskLevel {
    /// Bucket a delay probability
    ///
    /// Closed-open boundaries: exactly 0.33 is medium, exactly 0.66 is
    /// high.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= HIGH_PROBABILITY {
            RiskLevel::High
        } else if probability >= MEDIUM_PROBABILITY {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Bucket an expected delay duration, for display styling only
    pub fn from_delay_minutes(minutes: f64) -> Self {
        if minutes > HIGH_DELAY_MINUTES {
            RiskLevel::High
        } else if minutes > MEDIUM_DELAY_MINUTES {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Lowercase level name
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// User-facing summary text for the probability bucket
    pub fn text(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk of delay",
            RiskLevel::Medium => "Moderate risk of delay",
            RiskLevel::High => "High risk of significant delay",
        }
    }

    /// True for the high bucket
    pub fn is_high(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_buckets() {
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.3299), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.33), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.6599), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.66), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(1.0), RiskLevel::High);
    }

    #[test]
    fn test_delay_buckets() {
        assert_eq!(RiskLevel::from_delay_minutes(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_delay_minutes(30.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_delay_minutes(30.1), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_delay_minutes(60.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_delay_minutes(60.1), RiskLevel::High);
    }

    #[test]
    fn test_text_and_name() {
        assert_eq!(RiskLevel::High.as_str(), "high");
        assert_eq!(RiskLevel::High.text(), "High risk of significant delay");
        assert!(RiskLevel::High.is_high());
        assert!(!RiskLevel::Low.is_high());
    }
}
