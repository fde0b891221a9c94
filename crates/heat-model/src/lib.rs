//! Heat-Risk Decision Tree Model
//!
//! Frozen TinyML decision tree mapping ambient temperature and relative
//! humidity to one of four discrete heat-risk levels. The model runs on
//! constrained hardware: no allocation, no I/O, at most three comparisons
//! per call.

mod model;
mod risk;

pub use model::{classify, classify_ordinal};
pub use risk::{RiskLevel, RiskLevelError};
