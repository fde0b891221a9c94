//! Reading Validation Error Types

use thiserror::Error;

/// Errors during reading validation
#[derive(Debug, Clone, Error)]
pub enum ReadingError {
    /// Value outside the plausible sensor envelope
    #[error("{field} reading {value} is outside plausible range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// NaN or infinite value from the sensor
    #[error("{field} reading is not finite ({value})")]
    NonFinite { field: &'static str, value: f32 },
}
