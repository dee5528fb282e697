//! Detector state tracking

use serde::{Deserialize, Serialize};

/// Debounce state (tracked over one monitoring session)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorState {
    /// Timestamp of the last fired yaw-turn event
    pub last_yaw_event_at: Option<u64>,

    /// Timestamp of the last closure sample
    pub last_blink_at: Option<u64>,

    /// Consecutive closures observed within the gap window
    pub blink_streak_count: u32,

    /// Timestamp of the last large-pitch sample
    pub last_nod_at: Option<u64>,

    /// Latest sample timestamp seen
    pub last_sample_at: Option<u64>,
}

impl DetectorState {
    /// Clamp `timestamp_ms` to the latest time already seen and advance it.
    ///
    /// Returns the effective evaluation time and whether the sample arrived
    /// out of order.
    pub fn advance(&mut self, timestamp_ms: u64) -> (u64, bool) {
        match self.last_sample_at {
            Some(latest) if timestamp_ms < latest => (latest, true),
            _ => {
                self.last_sample_at = Some(timestamp_ms);
                (timestamp_ms, false)
            }
        }
    }

    /// Reset state (on session restart)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Milliseconds from `since` to `now`, zero if `now` is earlier
pub fn elapsed_ms(now: u64, since: u64) -> u64 {
    now.saturating_sub(since)
}
