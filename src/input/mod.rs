//! Materialized request inputs
//!
//! Types the serving layer hands to the pipeline:
//! - Itinerary requests (validated before feature construction)
//! - Weather observations (optional, degrade gracefully when absent)

pub mod itinerary;
pub mod weather;
