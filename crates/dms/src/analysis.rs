//! Evaluation results and fatigue rules

use serde::{Deserialize, Serialize};

/// Fatigue rule types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FatigueRule {
    /// Head turned away beyond the yaw threshold
    YawTurn,

    /// Rapid run of eye closures (micro-sleep)
    BlinkBurst,

    /// Large pitch drop repeated within the nod window
    HeadNod,
}

impl FatigueRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YawTurn => "yaw_turn",
            Self::BlinkBurst => "blink_burst",
            Self::HeadNod => "head_nod",
        }
    }
}

/// Result of evaluating one sample
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Timestamp the sample was evaluated at
    pub timestamp_ms: u64,

    /// Rules fired by this sample, in rule order
    pub fired: Vec<FatigueRule>,
}

impl Evaluation {
    /// Check if any rule fired
    pub fn is_fatigued(&self) -> bool {
        !self.fired.is_empty()
    }

    /// Check if a specific rule fired
    pub fn contains(&self, rule: FatigueRule) -> bool {
        self.fired.contains(&rule)
    }
}
