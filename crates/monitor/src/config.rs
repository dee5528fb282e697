//! Monitor configuration loading

use alerting::AlertConfig;
use config::{builder::DefaultState, ConfigBuilder, Environment, File};
use dms::FatigueConfig;
use serde::{Deserialize, Serialize};

use crate::MonitorError;

/// Environment variable prefix, e.g. `FATIGUE_DETECTOR__NOD_WINDOW_MS`
pub const ENV_PREFIX: &str = "FATIGUE";

/// Monitoring session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Detector thresholds
    pub detector: FatigueConfig,

    /// Alert latch behaviour
    pub alert: AlertConfig,

    /// Log level for the subscriber (trace, debug, info, warn, error)
    pub log_level: String,

    /// Alerts buffered between the worker and the presenter
    pub alert_channel_capacity: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            detector: FatigueConfig::default(),
            alert: AlertConfig::default(),
            log_level: "info".to_string(),
            alert_channel_capacity: 16,
        }
    }
}

impl MonitorConfig {
    /// Load from an optional config file plus `FATIGUE_*` environment overrides
    pub fn load(path: Option<&str>) -> Result<Self, MonitorError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        Self::build(builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        ))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, MonitorError> {
        Ok(builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_empty_sources_give_defaults() {
        let config = MonitorConfig::build(config::Config::builder()).unwrap();
        assert_eq!(config, MonitorConfig::default());
    }

    #[test]
    fn test_nested_overrides() {
        let builder = config::Config::builder().add_source(File::from_str(
            r#"
            log_level = "debug"

            [detector]
            yaw_refractory_ms = 8000

            [alert]
            hold_ms = 3000
            "#,
            FileFormat::Toml,
        ));
        let config = MonitorConfig::build(builder).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.detector.yaw_refractory_ms, 8000);
        assert_eq!(config.detector.nod_window_ms, 2000);
        assert_eq!(config.alert.hold_ms, Some(3000));
        assert_eq!(config.alert_channel_capacity, 16);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = MonitorConfig::load(Some("/nonexistent/fatigue-monitor"));
        assert!(matches!(result, Err(MonitorError::Config(_))));
    }
}
