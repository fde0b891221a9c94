//! Plausibility Validator for Ambient Readings

use crate::error::ReadingError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single temperature/humidity sample from a field sensor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientReading {
    /// Temperature (°C)
    pub temperature: f32,
    /// Relative humidity (%)
    pub humidity: f32,
    /// Sample time, milliseconds since epoch
    pub timestamp_ms: u64,
}

/// Plausible envelopes for ambient sensor hardware
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingConfig {
    /// Temperature plausible range (°C)
    pub temperature_range: (f32, f32),
    /// Humidity plausible range (%)
    pub humidity_range: (f32, f32),
}

impl Default for ReadingConfig {
    fn default() -> Self {
        // Operating envelope of common SHT/DHT-class ambient sensors.
        Self {
            temperature_range: (-40.0, 85.0),
            humidity_range: (0.0, 100.0),
        }
    }
}

/// Validator for raw sensor readings
pub struct ReadingValidator {
    config: ReadingConfig,
}

impl ReadingValidator {
    /// Create a new validator with given config
    pub fn new(config: ReadingConfig) -> Self {
        Self { config }
    }

    fn check(
        &self,
        field: &'static str,
        value: f32,
        range: (f32, f32),
    ) -> Result<(), ReadingError> {
        if !value.is_finite() {
            return Err(ReadingError::NonFinite { field, value });
        }
        if value < range.0 || value > range.1 {
            return Err(ReadingError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            });
        }
        Ok(())
    }

    /// Validate a temperature reading
    pub fn validate_temperature(&self, temperature: f32) -> Result<(), ReadingError> {
        self.check("temperature", temperature, self.config.temperature_range)
    }

    /// Validate a humidity reading
    pub fn validate_humidity(&self, humidity: f32) -> Result<(), ReadingError> {
        self.check("humidity", humidity, self.config.humidity_range)
    }

    /// Validate a full sample, temperature first
    pub fn validate(&self, reading: &AmbientReading) -> Result<(), ReadingError> {
        self.validate_temperature(reading.temperature)?;
        self.validate_humidity(reading.humidity)?;
        debug!(
            "reading at {}ms accepted: {}°C / {}%",
            reading.timestamp_ms, reading.temperature, reading.humidity
        );
        Ok(())
    }
}

impl Default for ReadingValidator {
    fn default() -> Self {
        Self::new(ReadingConfig::default())
    }
}
