//! Route-change notifications published by the navigator.

/// Route-change lifecycle notification.
///
/// Consumers such as the page selector (dirty/clean state) or page-view
/// analytics subscribe to these instead of polling the navigator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NavigationEvent {
    /// A path is about to be resolved.
    Start { path: String },
    /// The path was activated and `view` is shown.
    Success { path: String, view: String },
    /// The path was denied; `reason` is the failing requirement.
    Error { path: String, reason: String },
}

impl NavigationEvent {
    pub fn path(&self) -> &str {
        match self {
            NavigationEvent::Start { path }
            | NavigationEvent::Success { path, .. }
            | NavigationEvent::Error { path, .. } => path,
        }
    }
}
