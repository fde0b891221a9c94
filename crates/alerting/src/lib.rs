//! Heat-Risk Alerting
//!
//! Turns classifier output into alerts: per-sensor deduplication, cooldown,
//! and hourly throttling, plus severity mapping for downstream display.

mod manager;

pub use manager::{AlertConfig, AlertError, AlertManager, AlertState};
