//! Fatigue detection thresholds

use serde::{Deserialize, Serialize};

/// Head yaw magnitude above which a turn counts (degrees)
pub const YAW_THRESHOLD_DEGREES: f32 = 20.0;

/// Minimum time between two yaw-turn events (milliseconds)
pub const YAW_REFRACTORY_MS: u64 = 5000;

/// Eye-open probability below which an eye counts as closed
pub const EYE_CLOSED_THRESHOLD: f32 = 0.3;

/// Maximum gap between two closures of the same streak (milliseconds)
pub const BLINK_GAP_MS: u64 = 500;

/// Streak length that must be exceeded before a blink burst fires
pub const BLINK_STREAK_THRESHOLD: u32 = 3;

/// Head pitch magnitude above which a sample counts as a nod (degrees)
pub const PITCH_THRESHOLD_DEGREES: f32 = 20.0;

/// Window in which a second large-pitch sample fires a nod (milliseconds)
pub const NOD_WINDOW_MS: u64 = 2000;

/// Fatigue detector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueConfig {
    /// Yaw threshold for a sustained turn (degrees, compared against |yaw|)
    pub yaw_threshold_degrees: f32,

    /// Refractory period after a yaw-turn event (milliseconds)
    pub yaw_refractory_ms: u64,

    /// Eye-open probability below which an eye is closed
    pub eye_closed_threshold: f32,

    /// Maximum gap between consecutive closures in a streak (milliseconds)
    pub blink_gap_ms: u64,

    /// Blink burst fires once the streak exceeds this count
    pub blink_streak_threshold: u32,

    /// Pitch threshold for a nod (degrees, compared against |pitch|)
    pub pitch_threshold_degrees: f32,

    /// Window in which a repeated large pitch counts as a nod (milliseconds)
    pub nod_window_ms: u64,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            yaw_threshold_degrees: YAW_THRESHOLD_DEGREES,
            yaw_refractory_ms: YAW_REFRACTORY_MS,
            eye_closed_threshold: EYE_CLOSED_THRESHOLD,
            blink_gap_ms: BLINK_GAP_MS,
            blink_streak_threshold: BLINK_STREAK_THRESHOLD,
            pitch_threshold_degrees: PITCH_THRESHOLD_DEGREES,
            nod_window_ms: NOD_WINDOW_MS,
        }
    }
}

impl FatigueConfig {
    /// Create strict config (smaller angles, quicker re-alerts)
    pub fn strict() -> Self {
        Self {
            yaw_threshold_degrees: 15.0,
            yaw_refractory_ms: 3000,
            blink_streak_threshold: 2,
            pitch_threshold_degrees: 15.0,
            ..Default::default()
        }
    }

    /// Create lenient config (larger angles, longer refractory)
    pub fn lenient() -> Self {
        Self {
            yaw_threshold_degrees: 30.0,
            yaw_refractory_ms: 10_000,
            blink_streak_threshold: 5,
            pitch_threshold_degrees: 30.0,
            ..Default::default()
        }
    }
}
