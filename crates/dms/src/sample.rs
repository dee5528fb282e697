//! Per-frame facial measurements

use serde::{Deserialize, Serialize};

/// Eye-open probability assumed when the classifier gave no estimate
pub const DEFAULT_EYE_OPEN: f32 = 1.0;

/// One timestamped set of facial measurements for a processed frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FaceSample {
    /// Capture time (monotonic milliseconds)
    pub timestamp_ms: u64,
    /// Yaw (left-right rotation) in degrees
    pub head_yaw_degrees: f32,
    /// Pitch (up-down tilt) in degrees
    pub head_pitch_degrees: f32,
    /// Left eye open probability (0-1), if estimated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_eye_open: Option<f32>,
    /// Right eye open probability (0-1), if estimated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_eye_open: Option<f32>,
}

impl FaceSample {
    pub fn new(timestamp_ms: u64, head_yaw_degrees: f32, head_pitch_degrees: f32) -> Self {
        Self {
            timestamp_ms,
            head_yaw_degrees,
            head_pitch_degrees,
            left_eye_open: None,
            right_eye_open: None,
        }
    }

    /// Set both eye-open probabilities
    pub fn with_eyes(mut self, left: Option<f32>, right: Option<f32>) -> Self {
        self.left_eye_open = left;
        self.right_eye_open = right;
        self
    }

    /// Left eye probability, missing estimates read as open
    pub fn left_eye_open_or_default(&self) -> f32 {
        self.left_eye_open.unwrap_or(DEFAULT_EYE_OPEN)
    }

    /// Right eye probability, missing estimates read as open
    pub fn right_eye_open_or_default(&self) -> f32 {
        self.right_eye_open.unwrap_or(DEFAULT_EYE_OPEN)
    }

    /// Whether both eyes are below `threshold`
    pub fn is_closure(&self, threshold: f32) -> bool {
        self.left_eye_open_or_default() < threshold && self.right_eye_open_or_default() < threshold
    }
}
