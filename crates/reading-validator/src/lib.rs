//! Sensor Reading Validation
//!
//! Plausibility checks and noise filtering for raw temperature/humidity
//! readings before they reach the classifier. The classifier itself is
//! total and never rejects input; any strictness an embedding system wants
//! lives here, upstream.

mod error;
mod filter;
mod validator;

pub use error::ReadingError;
pub use filter::MedianFilter;
pub use validator::{AmbientReading, ReadingConfig, ReadingValidator};
