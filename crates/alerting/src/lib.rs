//! Alerting System
//!
//! Turns fired fatigue rules into user-facing alerts, holding off new
//! alerts while one is still being presented.

mod manager;

pub use manager::{AlertConfig, AlertEvent, AlertLatch, LatchState};
