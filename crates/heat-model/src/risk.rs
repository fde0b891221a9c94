//! Risk Level Category Type

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors when converting external data into a [`RiskLevel`]
#[derive(Debug, Clone, Error)]
pub enum RiskLevelError {
    /// Ordinal outside the 0..=3 range of the model
    #[error("invalid risk ordinal {0}, expected 0..=3")]
    InvalidOrdinal(u8),
}

/// Heat-risk level produced by the classifier
///
/// Ordinal-encoded for compatibility with integer-return interfaces:
/// 0 = Safe, 1 = Caution, 2 = Danger, 3 = Extreme. Variant order matches
/// severity, so `Ord` comparisons follow risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RiskLevel {
    /// No heat-health risk
    Safe = 0,
    /// Thermal discomfort possible
    Caution = 1,
    /// Heat-stroke risk
    Danger = 2,
    /// Extreme conditions
    Extreme = 3,
}

impl RiskLevel {
    /// Get the legacy integer encoding
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Caution => "caution",
            RiskLevel::Danger => "danger",
            RiskLevel::Extreme => "extreme",
        }
    }

    /// Get display advisory for this level
    pub fn advisory(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Optimal conditions. No health risk.",
            RiskLevel::Caution => "Caution: thermal discomfort possible.",
            RiskLevel::Danger => "Danger: heat stroke risk!",
            RiskLevel::Extreme => "Emergency: extreme conditions detected.",
        }
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = RiskLevelError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(RiskLevel::Safe),
            1 => Ok(RiskLevel::Caution),
            2 => Ok(RiskLevel::Danger),
            3 => Ok(RiskLevel::Extreme),
            other => Err(RiskLevelError::InvalidOrdinal(other)),
        }
    }
}
