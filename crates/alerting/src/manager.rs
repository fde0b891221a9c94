//! Heat Alert Manager Implementation

use heat_model::RiskLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised by the alerting layer
#[derive(Debug, Error)]
pub enum AlertError {
    /// Alert configuration could not be loaded
    #[error("failed to load alert config: {0}")]
    Config(#[from] config::ConfigError),
}

/// Alert configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Lowest risk level that raises an alert (default: Danger)
    pub min_level: RiskLevel,
    /// Cooldown period between duplicate alerts for one sensor (seconds)
    pub cooldown_seconds: u64,
    /// Maximum alerts per hour before throttling
    pub max_alerts_per_hour: usize,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            min_level: RiskLevel::Danger,
            cooldown_seconds: 1800, // 30 minutes
            max_alerts_per_hour: 10,
        }
    }
}

impl AlertConfig {
    /// Load configuration from a file (TOML/JSON/YAML by extension)
    pub fn from_file(path: &str) -> Result<Self, AlertError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}

/// State of an alert for one sensor
#[derive(Debug, Clone)]
pub struct AlertState {
    /// Last time this sensor alerted
    pub last_fired: Instant,
    /// Highest level seen while alerting
    pub peak_level: RiskLevel,
    /// Number of times fired
    pub fire_count: usize,
    /// Whether the alert is acknowledged
    pub acknowledged: bool,
}

/// Alert manager for deduplication and throttling
pub struct AlertManager {
    /// Configuration
    config: AlertConfig,
    /// Alert states by sensor id
    states: HashMap<String, AlertState>,
    /// Alerts fired in current hour
    hourly_count: usize,
    /// Hour start time
    hour_start: Instant,
}

impl AlertManager {
    /// Create a new alert manager
    pub fn new(config: AlertConfig) -> Self {
        info!("Creating heat alert manager with config: {:?}", config);
        Self {
            config,
            states: HashMap::new(),
            hourly_count: 0,
            hour_start: Instant::now(),
        }
    }

    /// Check whether an alert should fire for a sensor at the given level
    pub fn should_fire(&mut self, sensor_id: &str, level: RiskLevel) -> bool {
        if level < self.config.min_level {
            debug!(
                "Alert suppressed for {}: level {} below threshold {}",
                sensor_id,
                level.as_str(),
                self.config.min_level.as_str()
            );
            return false;
        }

        // Reset hourly counter if needed
        if self.hour_start.elapsed() > Duration::from_secs(3600) {
            self.hourly_count = 0;
            self.hour_start = Instant::now();
        }

        if self.hourly_count >= self.config.max_alerts_per_hour {
            warn!("Alert throttled for {}: max alerts per hour reached", sensor_id);
            return false;
        }

        if let Some(state) = self.states.get(sensor_id) {
            let cooldown = Duration::from_secs(self.config.cooldown_seconds);
            if state.last_fired.elapsed() < cooldown {
                debug!("Alert suppressed for {}: in cooldown period", sensor_id);
                return false;
            }
        }

        true
    }

    /// Record that an alert fired for a sensor
    pub fn record_fire(&mut self, sensor_id: &str, level: RiskLevel) {
        self.hourly_count += 1;

        let state = self
            .states
            .entry(sensor_id.to_string())
            .or_insert(AlertState {
                last_fired: Instant::now(),
                peak_level: level,
                fire_count: 0,
                acknowledged: false,
            });

        state.last_fired = Instant::now();
        state.peak_level = state.peak_level.max(level);
        state.fire_count += 1;
        state.acknowledged = false;

        info!(
            "Heat alert recorded: {} at {} (count: {})",
            sensor_id,
            level.as_str(),
            state.fire_count
        );
    }

    /// Acknowledge a sensor's alert
    pub fn acknowledge(&mut self, sensor_id: &str) -> bool {
        if let Some(state) = self.states.get_mut(sensor_id) {
            state.acknowledged = true;
            info!("Heat alert acknowledged: {}", sensor_id);
            true
        } else {
            false
        }
    }

    /// Get display severity for a risk level
    pub fn severity(level: RiskLevel) -> &'static str {
        match level {
            RiskLevel::Safe => "none",
            RiskLevel::Caution => "medium",
            RiskLevel::Danger => "high",
            RiskLevel::Extreme => "critical",
        }
    }

    /// Get pending (unacknowledged) alerts
    pub fn pending(&self) -> Vec<(&str, &AlertState)> {
        self.states
            .iter()
            .filter(|(_, state)| !state.acknowledged)
            .map(|(k, v)| (k.as_str(), v))
            .collect()
    }

    /// Get hourly alert count
    pub fn hourly_count(&self) -> usize {
        self.hourly_count
    }

    /// Clear all alert states
    pub fn clear(&mut self) {
        self.states.clear();
        self.hourly_count = 0;
    }
}

impl Default for AlertManager {
    fn default() -> Self {
        Self::new(AlertConfig::default())
    }
}
