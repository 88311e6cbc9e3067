//! Configuration management for the face mouse application

use crate::constants::{
    DEFAULT_BLINK_DURATION, DEFAULT_BLINK_THRESHOLD, DEFAULT_MOUTH_OPEN_DURATION,
    DEFAULT_MOUTH_OPEN_THRESHOLD, DEFAULT_SCROLL_SPEED, DEFAULT_SENSITIVITY,
    DEFAULT_TILT_THRESHOLD,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gesture tracking parameters
    pub tracking: TrackingConfig,
}

/// The seven tunable tracking parameters.
///
/// A session takes an immutable snapshot of these at start; swapping values
/// mid-session has no effect until the next session starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Pointer motion sensitivity (applied squared)
    pub sensitivity: f64,

    /// Eye aspect ratio below which an eye counts as closed
    pub blink_threshold: f64,

    /// Minimum eye-closure hold before a click is emitted (seconds)
    pub blink_duration: f64,

    /// Inner-lip gap above which the mouth counts as open (pixels)
    pub mouth_open_threshold: f64,

    /// Minimum mouth-open hold before a double click is emitted (seconds)
    pub mouth_open_duration: f64,

    /// Angular deviation from neutral before scrolling starts (degrees)
    pub tilt_threshold: f64,

    /// Scroll magnitude scale factor
    pub scroll_speed: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracking: TrackingConfig::default(),
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            blink_threshold: DEFAULT_BLINK_THRESHOLD,
            blink_duration: DEFAULT_BLINK_DURATION,
            mouth_open_threshold: DEFAULT_MOUTH_OPEN_THRESHOLD,
            mouth_open_duration: DEFAULT_MOUTH_OPEN_DURATION,
            tilt_threshold: DEFAULT_TILT_THRESHOLD,
            scroll_speed: DEFAULT_SCROLL_SPEED,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first out-of-range parameter.
    pub fn validate(&self) -> Result<()> {
        let t = &self.tracking;

        if t.sensitivity <= 0.0 {
            return Err(Error::Config("Sensitivity must be greater than 0".to_string()));
        }
        if !(0.0..=1.0).contains(&t.blink_threshold) {
            return Err(Error::Config(
                "Blink threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        if t.blink_duration < 0.0 {
            return Err(Error::Config("Blink duration must not be negative".to_string()));
        }
        if t.mouth_open_threshold <= 0.0 {
            return Err(Error::Config(
                "Mouth open threshold must be greater than 0".to_string(),
            ));
        }
        if t.mouth_open_duration < 0.0 {
            return Err(Error::Config(
                "Mouth open duration must not be negative".to_string(),
            ));
        }
        if t.tilt_threshold <= 0.0 {
            return Err(Error::Config("Tilt threshold must be greater than 0".to_string()));
        }
        if t.scroll_speed < 0.0 {
            return Err(Error::Config("Scroll speed must not be negative".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face Mouse Configuration

# Gesture tracking parameters
tracking:
  sensitivity: 3.0
  blink_threshold: 0.2
  blink_duration: 0.3
  mouth_open_threshold: 30.0
  mouth_open_duration: 0.5
  tilt_threshold: 10.0
  scroll_speed: 20.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tracking.sensitivity, 3.0);
        assert_eq!(config.tracking.blink_threshold, 0.2);
        assert_eq!(config.tracking.blink_duration, 0.3);
        assert_eq!(config.tracking.mouth_open_threshold, 30.0);
        assert_eq!(config.tracking.mouth_open_duration, 0.5);
        assert_eq!(config.tracking.tilt_threshold, 10.0);
        assert_eq!(config.tracking.scroll_speed, 20.0);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.tracking.scroll_speed, 20.0);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.tracking.sensitivity = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.tracking.blink_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.tracking.tilt_threshold = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("tracking:\n  sensitivity: 5.0\n").unwrap();
        assert_eq!(config.tracking.sensitivity, 5.0);
        assert_eq!(config.tracking.blink_threshold, 0.2);
    }
}
