// Configuration for the sliding-window complexity monitor
//
// Fixed at construction time and immutable for the monitor's lifetime.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors, rejected before a monitor is built
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("capacity must be positive, got {0}")]
    ZeroCapacity(usize),

    #[error("threshold must be in (0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for linear-complexity monitoring
///
/// # Example
/// ```
/// use lfsr_sentinel::monitor::MonitorConfig;
///
/// let config = MonitorConfig::default();
/// assert_eq!(config.capacity, 100);
/// assert_eq!(config.threshold, 0.8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Window size in bits; evaluation starts once the window is full
    pub capacity: usize,

    /// Minimum acceptable complexity ratio L / capacity
    ///
    /// Ratios strictly below the threshold are flagged. Random bits settle
    /// near 0.5 for large windows, so the default of 0.8 is aggressive; treat it
    /// as a tunable rather than a calibrated value.
    pub threshold: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            threshold: 0.8,
        }
    }
}

impl MonitorConfig {
    pub fn new(capacity: usize, threshold: f64) -> Result<Self, ConfigError> {
        let config = Self {
            capacity,
            threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity(self.capacity));
        }

        // NaN fails the range check as well
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }

        Ok(())
    }

    /// Parse and validate a TOML document
    ///
    /// Missing keys fall back to the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
