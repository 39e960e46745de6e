//! Error types for the delay assessment engine

use std::fmt;

/// Errors that can occur during a delay assessment
///
/// All variants are terminal for the request: inference is deterministic
/// and side-effect-free, so nothing here is retried. Missing weather data
/// is deliberately NOT an error; it degrades to neutral zero-risk features.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessError {
    /// Request field missing or out of range (e.g., hour outside 0-23)
    MalformedRequest(String),

    /// Airport or airline code absent from the trained encoding table.
    /// An unseen code must be rejected, never mapped to an arbitrary index.
    UnknownCategory(String),

    /// Underlying scoring function errored or returned a non-finite value
    PredictionFailed(String),
}

impl fmt::Display for AssessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessError::MalformedRequest(msg) => write!(f, "Malformed request: {}", msg),
            AssessError::UnknownCategory(msg) => write!(f, "Unknown category: {}", msg),
            AssessError::PredictionFailed(msg) => write!(f, "Prediction failed: {}", msg),
        }
    }
}

impl std::error::Error for AssessError {}
