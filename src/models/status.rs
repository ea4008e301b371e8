//! Lifecycle status shared by events and fundraising initiatives

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};

/// Where an event or initiative is in its lifecycle
///
/// Planning -> Active -> Completed, with Cancelled reachable from any
/// non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LifecycleStatus {
    #[default]
    Planning,
    Active,
    Completed,
    Cancelled,
}

impl LifecycleStatus {
    /// Completed and Cancelled accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Check whether moving to `next` is allowed
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Planning, Self::Active)
                | (Self::Active, Self::Completed)
                | (Self::Planning, Self::Cancelled)
                | (Self::Active, Self::Cancelled)
        )
    }

    /// Validate a transition and return the new status
    pub fn transition_to(self, next: Self) -> LedgerResult<Self> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(LedgerError::InvalidTransition {
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        };
        f.pad(s)
    }
}

impl FromStr for LifecycleStatus {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planning" => Ok(Self::Planning),
            "active" => Ok(Self::Active),
            "completed" | "complete" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            other => Err(LedgerError::Validation(format!(
                "Unknown status '{}'. Use planning, active, completed or cancelled",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let status = LifecycleStatus::Planning;
        let status = status.transition_to(LifecycleStatus::Active).unwrap();
        let status = status.transition_to(LifecycleStatus::Completed).unwrap();
        assert!(status.is_terminal());
    }

    #[test]
    fn test_cancel_from_non_terminal() {
        assert!(LifecycleStatus::Planning.can_transition_to(LifecycleStatus::Cancelled));
        assert!(LifecycleStatus::Active.can_transition_to(LifecycleStatus::Cancelled));
        assert!(!LifecycleStatus::Completed.can_transition_to(LifecycleStatus::Cancelled));
    }

    #[test]
    fn test_rejected_transitions() {
        let err = LifecycleStatus::Completed
            .transition_to(LifecycleStatus::Active)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid status transition: Completed -> Active"
        );
        assert!(LifecycleStatus::Planning
            .transition_to(LifecycleStatus::Completed)
            .is_err());
        assert!(LifecycleStatus::Active
            .transition_to(LifecycleStatus::Active)
            .is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "Canceled".parse::<LifecycleStatus>().unwrap(),
            LifecycleStatus::Cancelled
        );
        assert!("done".parse::<LifecycleStatus>().is_err());
    }
}
