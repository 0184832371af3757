/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Deny-reason to fallback-path mapping.

use crate::guard::registry::RequirementRegistry;
use crate::guard::requirement::BuiltinRequirement;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A denial reason with no configured fallback path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnmappedDenialError(pub String);

impl Display for UnmappedDenialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "no fallback route for denial reason: {}", self.0)
    }
}

impl Error for UnmappedDenialError {}

/// Maps deny reasons (requirement names) to the path a denied navigation goes to.
#[derive(Clone, Debug, Default)]
pub struct FallbackTable {
    fallbacks: HashMap<String, String>,
}

impl FallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallbacks for every [`BuiltinRequirement`].
    pub fn with_builtin_defaults() -> Self {
        let fallbacks = BuiltinRequirement::ALL
            .into_iter()
            .map(|requirement| {
                (
                    requirement.name().to_string(),
                    requirement.default_fallback().to_string(),
                )
            })
            .collect();

        Self { fallbacks }
    }

    /// Sets the fallback for `reason`, returning the path it replaced.
    pub fn insert(&mut self, reason: &str, path: &str) -> Option<String> {
        self.fallbacks.insert(reason.to_string(), path.to_string())
    }

    pub fn fallback_for(&self, reason: &str) -> Result<&str, UnmappedDenialError> {
        self.fallbacks
            .get(reason)
            .map(String::as_str)
            .ok_or_else(|| UnmappedDenialError(reason.to_string()))
    }

    /// Checks that every requirement the registry can deny on has a fallback.
    pub fn validate(&self, registry: &RequirementRegistry) -> Result<(), UnmappedDenialError> {
        match registry
            .names()
            .into_iter()
            .find(|name| !self.fallbacks.contains_key(*name))
        {
            Some(name) => Err(UnmappedDenialError(name.to_string())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FallbackTable, UnmappedDenialError};
    use crate::guard::registry::RequirementRegistry;
    use crate::guard::requirement::RequirementPredicate;
    use crate::session::Session;
    use async_trait::async_trait;

    struct Always;

    #[async_trait]
    impl RequirementPredicate for Always {
        async fn check(&self, _session: &dyn Session) -> bool {
            true
        }
    }

    #[test]
    fn builtin_defaults_cover_builtin_registry() {
        let fallbacks = FallbackTable::with_builtin_defaults();

        assert_eq!(fallbacks.validate(&RequirementRegistry::with_builtin()), Ok(()));
        assert_eq!(fallbacks.fallback_for("logged"), Ok("/accounts/login"));
        assert_eq!(fallbacks.fallback_for("notlogged"), Ok("/"));
        assert_eq!(fallbacks.fallback_for("admin"), Ok("/"));
    }

    #[test]
    fn unmapped_reason_is_an_error() {
        let fallbacks = FallbackTable::with_builtin_defaults();

        assert_eq!(
            fallbacks.fallback_for("beta-tester"),
            Err(UnmappedDenialError("beta-tester".to_string()))
        );
    }

    #[test]
    fn validate_reports_registered_requirement_without_fallback() {
        let mut registry = RequirementRegistry::with_builtin();
        registry.register("beta-tester", Always).unwrap();
        let mut fallbacks = FallbackTable::with_builtin_defaults();

        assert_eq!(
            fallbacks.validate(&registry),
            Err(UnmappedDenialError("beta-tester".to_string()))
        );

        fallbacks.insert("beta-tester", "/beta/waitlist");
        assert_eq!(fallbacks.validate(&registry), Ok(()));
    }
}
