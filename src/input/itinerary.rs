//! Itinerary request type and validation

use serde::{Deserialize, Serialize};

use crate::error::AssessError;

/// A scheduled flight to assess
///
/// Categorical codes are resolved against the trained encoding tables
/// during feature construction; validation here only covers field ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryRequest {
    /// Origin airport IATA code (e.g., "ATL")
    pub origin: String,

    /// Destination airport IATA code (e.g., "LAX")
    pub destination: String,

    /// Month of travel (1-12)
    pub month: u32,

    /// Day of month (1-31)
    pub day_of_month: u32,

    /// Day of week (1 = Monday .. 7 = Sunday)
    pub day_of_week: u32,

    /// Scheduled departure hour (0-23, local)
    pub dep_hour: u32,

    /// Scheduled arrival hour (0-23, local)
    pub arr_hour: u32,

    /// Operating airline IATA code (e.g., "DL")
    pub airline: String,
}

impl ItineraryRequest {
    /// Validate field ranges
    ///
    /// # Errors
    ///
    /// Returns `AssessError::MalformedRequest` for any out-of-range field
    /// or when origin and destination are the same airport.
    pub fn validate(&self) -> Result<(), AssessError> {
        if self.origin == self.destination {
            return Err(AssessError::MalformedRequest(format!(
                "origin and destination are both {}",
                self.origin
            )));
        }
        if !(1..=12).contains(&self.month) {
            return Err(AssessError::MalformedRequest(format!(
                "month {} outside 1-12",
                self.month
            )));
        }
        if !(1..=31).contains(&self.day_of_month) {
            return Err(AssessError::MalformedRequest(format!(
                "day of month {} outside 1-31",
                self.day_of_month
            )));
        }
        if !(1..=7).contains(&self.day_of_week) {
            return Err(AssessError::MalformedRequest(format!(
                "day of week {} outside 1-7",
                self.day_of_week
            )));
        }
        if self.dep_hour > 23 {
            return Err(AssessError::MalformedRequest(format!(
                "departure hour {} outside 0-23",
                self.dep_hour
            )));
        }
        if self.arr_hour > 23 {
            return Err(AssessError::MalformedRequest(format!(
                "arrival hour {} outside 0-23",
                self.arr_hour
            )));
        }
        Ok(())
    }
}
