//! Alert Latch Implementation

use dms::{Evaluation, FatigueRule};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Alert configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Re-arm automatically this long after an alert (stream milliseconds).
    /// `None` waits for an explicit `complete()` from the presenter.
    pub hold_ms: Option<u64>,
}

/// A user-facing fatigue alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEvent {
    /// Sample timestamp that raised the alert
    pub timestamp_ms: u64,
    /// Rules that fired on that sample
    pub rules: Vec<FatigueRule>,
}

/// Latch state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LatchState {
    /// Ready to raise the next alert
    #[default]
    Armed,
    /// An alert is being presented since the given timestamp
    Alerting { since_ms: u64 },
}

/// Suppresses repeated alerts until the current one is done
pub struct AlertLatch {
    /// Configuration
    config: AlertConfig,
    /// Current state
    state: LatchState,
    /// Alerts raised
    fire_count: usize,
    /// Fatigue evaluations swallowed while alerting
    suppressed_count: usize,
}

impl AlertLatch {
    /// Create a new alert latch
    pub fn new(config: AlertConfig) -> Self {
        info!("Creating alert latch with config: {:?}", config);
        Self {
            config,
            state: LatchState::Armed,
            fire_count: 0,
            suppressed_count: 0,
        }
    }

    /// Offer an evaluation; returns an alert if one should be presented
    pub fn offer(&mut self, evaluation: &Evaluation) -> Option<AlertEvent> {
        self.expire(evaluation.timestamp_ms);

        if !evaluation.is_fatigued() {
            return None;
        }

        if let LatchState::Alerting { since_ms } = self.state {
            self.suppressed_count += 1;
            debug!(
                "Alert suppressed: already alerting since {}ms ({:?})",
                since_ms, evaluation.fired
            );
            return None;
        }

        self.state = LatchState::Alerting {
            since_ms: evaluation.timestamp_ms,
        };
        self.fire_count += 1;
        info!(
            "Fatigue alert at {}ms: {:?} (count: {})",
            evaluation.timestamp_ms, evaluation.fired, self.fire_count
        );

        Some(AlertEvent {
            timestamp_ms: evaluation.timestamp_ms,
            rules: evaluation.fired.clone(),
        })
    }

    /// Presentation finished; re-arm the latch
    pub fn complete(&mut self) -> bool {
        match self.state {
            LatchState::Alerting { .. } => {
                self.state = LatchState::Armed;
                info!("Alert completed, latch re-armed");
                true
            }
            LatchState::Armed => false,
        }
    }

    fn expire(&mut self, now_ms: u64) {
        if let (Some(hold), LatchState::Alerting { since_ms }) = (self.config.hold_ms, self.state) {
            if now_ms.saturating_sub(since_ms) >= hold {
                debug!("Alert hold of {}ms elapsed", hold);
                self.state = LatchState::Armed;
            }
        }
    }

    pub fn state(&self) -> LatchState {
        self.state
    }

    pub fn is_alerting(&self) -> bool {
        matches!(self.state, LatchState::Alerting { .. })
    }

    /// Get number of alerts raised
    pub fn fire_count(&self) -> usize {
        self.fire_count
    }

    /// Get number of fatigue evaluations suppressed while alerting
    pub fn suppressed_count(&self) -> usize {
        self.suppressed_count
    }
}

impl Default for AlertLatch {
    fn default() -> Self {
        Self::new(AlertConfig::default())
    }
}
