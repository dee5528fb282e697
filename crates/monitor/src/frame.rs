//! Classified frames delivered by the capture pipeline

use dms::FaceSample;
use serde::{Deserialize, Serialize};

/// Measurements for one detected face
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FaceMeasurement {
    pub head_yaw_degrees: f32,
    pub head_pitch_degrees: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_eye_open: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_eye_open: Option<f32>,
}

/// One processed frame (zero or more faces)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Capture timestamp (milliseconds)
    pub timestamp_ms: u64,
    /// Faces in classifier order
    #[serde(default)]
    pub faces: Vec<FaceMeasurement>,
}

impl Frame {
    pub fn new(timestamp_ms: u64, faces: Vec<FaceMeasurement>) -> Self {
        Self { timestamp_ms, faces }
    }

    /// Sample for the first detected face, if any
    pub fn primary_sample(&self) -> Option<FaceSample> {
        self.faces.first().map(|face| {
            FaceSample::new(self.timestamp_ms, face.head_yaw_degrees, face.head_pitch_degrees)
                .with_eyes(face.left_eye_open, face.right_eye_open)
        })
    }
}
