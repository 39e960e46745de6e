//! Result aggregation modules
//!
//! Turns raw model output into the response object the serving layer
//! renders:
//! - Risk-level bucketing
//! - Attribution ranking and display formatting
//! - Result types

pub mod attribution;
pub mod result;
pub mod risk;
