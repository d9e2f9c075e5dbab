//! Events emitted by the hint state machine
//!
//! Structured event types for hint lifecycle transitions, broadcast so a
//! host UI can drive visual affordances (bounce animation, tooltip,
//! expanded panel).

use serde::{Deserialize, Serialize};

/// Why a hint left the `Hinting` state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// The 5 second auto-dismiss timer elapsed with no interaction
    TimedOut,
    /// The user clicked the card while the hint was showing
    Clicked,
}

/// Events emitted during hint transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HintEvent {
    /// The one-time tooltip affordance became visible
    HintShown,

    /// The tooltip affordance was hidden
    HintDismissed {
        /// What ended the hinting state
        reason: DismissReason,
    },

    /// The modifier detail panel was opened
    Expanded,

    /// The modifier detail panel was closed
    Collapsed,

    /// The seen flag was committed; no card will hint again
    SeenCommitted,
}

impl std::fmt::Display for HintEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HintEvent::HintShown => write!(f, "HINT_SHOWN"),
            HintEvent::HintDismissed { reason } => match reason {
                DismissReason::TimedOut => write!(f, "HINT_DISMISSED (timeout)"),
                DismissReason::Clicked => write!(f, "HINT_DISMISSED (clicked)"),
            },
            HintEvent::Expanded => write!(f, "EXPANDED"),
            HintEvent::Collapsed => write!(f, "COLLAPSED"),
            HintEvent::SeenCommitted => write!(f, "SEEN_COMMITTED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = HintEvent::HintDismissed {
            reason: DismissReason::TimedOut,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("hint_dismissed"));
        assert!(json.contains("timed_out"));
    }

    #[test]
    fn test_event_deserialization() {
        let json = r#"{"type":"seen_committed"}"#;
        let event: HintEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(event, HintEvent::SeenCommitted));
    }
}
