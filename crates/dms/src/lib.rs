//! Driver Monitoring System (DMS) - fatigue detection
//!
//! Converts a stream of per-frame facial measurements into debounced
//! fatigue events:
//! - Sustained head yaw turn (looking away / yawning)
//! - Burst of rapid eye closures (micro-sleep)
//! - Repeated large head pitch (nodding off)
//!
//! Capture, face classification, and alert presentation are handled by
//! the caller; this crate only holds the debounce state machine.

pub mod analysis;
pub mod config;
pub mod detector;
pub mod sample;
pub mod state;

pub use analysis::{Evaluation, FatigueRule};
pub use config::FatigueConfig;
pub use detector::FatigueDetector;
pub use sample::FaceSample;
pub use state::DetectorState;
