//! Fatigue detection state machine

use tracing::{debug, info, warn};

use crate::analysis::{Evaluation, FatigueRule};
use crate::config::FatigueConfig;
use crate::sample::FaceSample;
use crate::state::{elapsed_ms, DetectorState};

/// Debounces a stream of face samples into fatigue events.
///
/// One instance per monitoring session. Samples must be fed in timestamp
/// order; an older sample is evaluated at the latest timestamp already seen.
#[derive(Debug, Clone, Default)]
pub struct FatigueDetector {
    config: FatigueConfig,
    state: DetectorState,
}

impl FatigueDetector {
    /// Create a new detector with configuration
    pub fn new(config: FatigueConfig) -> Self {
        info!("Creating fatigue detector with config: {:?}", config);
        Self {
            config,
            state: DetectorState::default(),
        }
    }

    pub fn config(&self) -> &FatigueConfig {
        &self.config
    }

    pub fn state(&self) -> &DetectorState {
        &self.state
    }

    /// Evaluate all rules against one sample and update state
    pub fn evaluate(&mut self, sample: &FaceSample) -> Evaluation {
        let (now, out_of_order) = self.state.advance(sample.timestamp_ms);
        if out_of_order {
            warn!(
                "Sample at {}ms is older than {}ms, evaluating at latest time",
                sample.timestamp_ms, now
            );
        }

        let mut fired = Vec::new();

        if self.check_yaw_turn(sample, now) {
            fired.push(FatigueRule::YawTurn);
        }
        if self.check_blink_burst(sample, now) {
            fired.push(FatigueRule::BlinkBurst);
        }
        if self.check_head_nod(sample, now) {
            fired.push(FatigueRule::HeadNod);
        }

        for rule in &fired {
            debug!(rule = rule.as_str(), timestamp_ms = now, "Fatigue rule fired");
        }

        Evaluation {
            timestamp_ms: now,
            fired,
        }
    }

    fn check_yaw_turn(&mut self, sample: &FaceSample, now: u64) -> bool {
        let yaw = sample.head_yaw_degrees;
        let turned = yaw.is_finite() && yaw.abs() > self.config.yaw_threshold_degrees;
        if !turned {
            return false;
        }

        let refractory_over = match self.state.last_yaw_event_at {
            None => true,
            Some(last) => elapsed_ms(now, last) > self.config.yaw_refractory_ms,
        };

        if refractory_over {
            self.state.last_yaw_event_at = Some(now);
        }
        refractory_over
    }

    fn check_blink_burst(&mut self, sample: &FaceSample, now: u64) -> bool {
        if !sample.is_closure(self.config.eye_closed_threshold) {
            return false;
        }

        let within_gap = self
            .state
            .last_blink_at
            .is_some_and(|last| elapsed_ms(now, last) < self.config.blink_gap_ms);

        if within_gap {
            self.state.blink_streak_count = self.state.blink_streak_count.saturating_add(1);
        } else {
            self.state.blink_streak_count = 1;
        }
        self.state.last_blink_at = Some(now);

        debug!(streak = self.state.blink_streak_count, "Eye closure");
        self.state.blink_streak_count > self.config.blink_streak_threshold
    }

    fn check_head_nod(&mut self, sample: &FaceSample, now: u64) -> bool {
        let pitch = sample.head_pitch_degrees;
        let tilted = pitch.is_finite() && pitch.abs() > self.config.pitch_threshold_degrees;
        if !tilted {
            return false;
        }

        let armed = self
            .state
            .last_nod_at
            .is_some_and(|last| elapsed_ms(now, last) < self.config.nod_window_ms);

        // Every large pitch re-arms the window, fired or not
        self.state.last_nod_at = Some(now);
        armed
    }

    /// Reset detector state (on session restart)
    pub fn reset(&mut self) {
        info!("Resetting fatigue detector state");
        self.state.reset();
    }
}
