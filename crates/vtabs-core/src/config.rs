//! Page configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Auto-cycle interval used when the caller gives none
    pub default_interval_ms: u64,
    /// Force debug panels on every widget created through the page
    pub debug: bool,
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration");
        Ok(config)
    }

    pub fn default_interval(&self) -> Duration {
        Duration::from_millis(self.default_interval_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.default_interval_ms == 0 {
            return Err(CoreError::Config(
                "default_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_interval_ms: vtabs_cycle::DEFAULT_INTERVAL.as_millis() as u64,
            debug: false,
            log_filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_interval(), Duration::from_millis(5000));
        assert!(!config.debug);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"debug": true}"#).unwrap();
        assert!(config.debug);
        assert_eq!(config.default_interval_ms, 5000);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = Config::from_json(r#"{"default_interval_ms": 0}"#);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("/nonexistent/vtabs.json");
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
