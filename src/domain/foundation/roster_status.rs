//! RosterStatus enum for tracking the lifecycle of recruitment rosters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RosterStatus {
    #[default]
    Open,
    Cancelled,
}

impl RosterStatus {
    /// Returns true if participants may still join or leave.
    pub fn is_mutable(&self) -> bool {
        matches!(self, RosterStatus::Open)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Open -> Cancelled
    pub fn can_transition_to(&self, target: &RosterStatus) -> bool {
        use RosterStatus::*;
        matches!((self, target), (Open, Cancelled))
    }
}

impl fmt::Display for RosterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RosterStatus::Open => "Open",
            RosterStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open() {
        assert_eq!(RosterStatus::default(), RosterStatus::Open);
    }

    #[test]
    fn only_open_is_mutable() {
        assert!(RosterStatus::Open.is_mutable());
        assert!(!RosterStatus::Cancelled.is_mutable());
    }

    #[test]
    fn open_can_be_cancelled_once() {
        assert!(RosterStatus::Open.can_transition_to(&RosterStatus::Cancelled));
        assert!(!RosterStatus::Cancelled.can_transition_to(&RosterStatus::Cancelled));
        assert!(!RosterStatus::Cancelled.can_transition_to(&RosterStatus::Open));
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&RosterStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }
}
