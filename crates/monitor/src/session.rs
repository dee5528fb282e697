//! Monitoring session: one detector plus one alert latch

use alerting::{AlertEvent, AlertLatch};
use dms::FatigueDetector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MonitorConfig;
use crate::frame::Frame;

/// Session counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Frames handed to the session
    pub frames_seen: u64,
    /// Frames skipped because no face was found
    pub frames_without_face: u64,
    /// Alerts raised to the presenter
    pub alerts_raised: usize,
    /// Fatigue evaluations swallowed while an alert was active
    pub alerts_suppressed: usize,
    /// Input records that could not be decoded into a frame
    pub malformed_frames: u64,
}

/// Owns the detector and latch for a single driver session
pub struct MonitorSession {
    detector: FatigueDetector,
    latch: AlertLatch,
    frames_seen: u64,
    frames_without_face: u64,
    malformed_frames: u64,
}

impl MonitorSession {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            detector: FatigueDetector::new(config.detector.clone()),
            latch: AlertLatch::new(config.alert.clone()),
            frames_seen: 0,
            frames_without_face: 0,
            malformed_frames: 0,
        }
    }

    /// Process one frame; returns an alert when the presenter should show one
    pub fn process(&mut self, frame: &Frame) -> Option<AlertEvent> {
        self.frames_seen += 1;

        let Some(sample) = frame.primary_sample() else {
            self.frames_without_face += 1;
            debug!("No face in frame at {}ms", frame.timestamp_ms);
            return None;
        };

        let evaluation = self.detector.evaluate(&sample);
        self.latch.offer(&evaluation)
    }

    /// Count an input record that could not be decoded into a frame
    pub fn record_malformed(&mut self) {
        self.malformed_frames += 1;
    }

    /// Presenter finished showing the current alert
    pub fn complete_alert(&mut self) -> bool {
        self.latch.complete()
    }

    pub fn is_alerting(&self) -> bool {
        self.latch.is_alerting()
    }

    pub fn detector(&self) -> &FatigueDetector {
        &self.detector
    }

    /// Reset detector state (on driver change)
    pub fn reset(&mut self) {
        info!("Resetting monitoring session");
        self.detector.reset();
        self.latch.complete();
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            frames_seen: self.frames_seen,
            frames_without_face: self.frames_without_face,
            alerts_raised: self.latch.fire_count(),
            alerts_suppressed: self.latch.suppressed_count(),
            malformed_frames: self.malformed_frames,
        }
    }
}
