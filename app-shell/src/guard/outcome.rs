use std::fmt::{Display, Formatter};

/// Result of resolving a [`GuardRequest`](crate::GuardRequest).
///
/// A denial is an expected outcome handled by redirecting, not an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GuardOutcome {
    Allowed,
    /// Carries the name of the first requirement that failed.
    Denied(String),
}

impl GuardOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardOutcome::Allowed)
    }

    pub fn denied_reason(&self) -> Option<&str> {
        match self {
            GuardOutcome::Allowed => None,
            GuardOutcome::Denied(reason) => Some(reason),
        }
    }
}

impl Display for GuardOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardOutcome::Allowed => write!(f, "allowed"),
            GuardOutcome::Denied(reason) => write!(f, "denied({reason})"),
        }
    }
}
