//! Ordered requirement lists attached to navigation targets.

use crate::guard::requirement::BuiltinRequirement;
use std::fmt::{Display, Formatter};

/// Ordered sequence of requirement names evaluated before a navigation.
///
/// Order is part of the contract: the first failing name becomes the deny reason.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GuardRequest {
    requirements: Vec<String>,
}

impl GuardRequest {
    /// A request with no requirements. Always resolves to `Allowed`.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requirements: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.requirements.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl From<&str> for GuardRequest {
    fn from(name: &str) -> Self {
        Self::from_names([name])
    }
}

impl From<BuiltinRequirement> for GuardRequest {
    fn from(requirement: BuiltinRequirement) -> Self {
        Self::from_names([requirement.name()])
    }
}

impl<S: Into<String>> FromIterator<S> for GuardRequest {
    fn from_iter<I: IntoIterator<Item = S>>(names: I) -> Self {
        Self::from_names(names)
    }
}

impl Display for GuardRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.requirements.join(","))
    }
}
