//! Fatigue Monitor
//!
//! Session plumbing around the fatigue detector: frame intake, alert
//! latching, a single-worker pipeline, and stream replay.

pub mod config;
pub mod frame;
pub mod replay;
pub mod session;
pub mod worker;

pub use config::MonitorConfig;
pub use frame::{FaceMeasurement, Frame};
pub use replay::replay;
pub use session::{MonitorSession, SessionStats};
pub use worker::{spawn_worker, MonitorHandle};

use thiserror::Error;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Monitor error types
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed frame on line {line}: {source}")]
    Frame {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Monitor worker stopped")]
    WorkerStopped,
}

/// Initialize logging to stderr (stdout carries alerts)
///
/// An unknown level falls back to `info` with a warning.
pub fn init_logging(level: &str) -> Result<(), MonitorError> {
    let parsed = parse_level(level);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parsed.unwrap_or(Level::INFO))
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| MonitorError::Logging(e.to_string()))?;

    if parsed.is_none() {
        warn!("Unknown log level {:?}, using info", level);
    }
    Ok(())
}

fn parse_level(level: &str) -> Option<Level> {
    level.trim().parse::<Level>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(Level::WARN));
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }
}
