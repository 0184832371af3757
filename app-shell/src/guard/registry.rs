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

//! Name-keyed requirement registry.

use crate::guard::requirement::{BuiltinRequirement, RequirementPredicate};
use crate::observability::events;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "requirement_registry";

/// Requirement registration failures.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegisterRequirementError {
    DuplicateRequirement(String),
}

impl Display for RegisterRequirementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequirementError::DuplicateRequirement(name) => {
                write!(f, "requirement already registered: {name}")
            }
        }
    }
}

impl Error for RegisterRequirementError {}

/// Maps requirement names to their predicates.
///
/// Entries are immutable once registered and are never removed.
#[derive(Clone, Default)]
pub struct RequirementRegistry {
    requirements: HashMap<String, Arc<dyn RequirementPredicate>>,
}

impl RequirementRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every [`BuiltinRequirement`].
    pub fn with_builtin() -> Self {
        let requirements = BuiltinRequirement::ALL
            .into_iter()
            .map(|requirement| {
                let predicate: Arc<dyn RequirementPredicate> = Arc::new(requirement);
                (requirement.name().to_string(), predicate)
            })
            .collect();

        Self { requirements }
    }

    /// Registers `predicate` under `name`. Re-registering a name is rejected.
    pub fn register<P>(&mut self, name: &str, predicate: P) -> Result<(), RegisterRequirementError>
    where
        P: RequirementPredicate + 'static,
    {
        if self.requirements.contains_key(name) {
            warn!(
                event = events::REQUIREMENT_REGISTER_DUPLICATE,
                component = COMPONENT,
                requirement = name,
                "requirement already registered"
            );
            return Err(RegisterRequirementError::DuplicateRequirement(
                name.to_string(),
            ));
        }

        self.requirements
            .insert(name.to_string(), Arc::new(predicate));
        debug!(
            event = events::REQUIREMENT_REGISTER_OK,
            component = COMPONENT,
            requirement = name,
            "requirement registered"
        );
        Ok(())
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<&Arc<dyn RequirementPredicate>> {
        self.requirements.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.requirements.contains_key(name)
    }

    /// Registered names in lexical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.requirements.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl Debug for RequirementRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequirementRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{RegisterRequirementError, RequirementRegistry};
    use crate::guard::requirement::{BuiltinRequirement, RequirementPredicate};
    use crate::session::Session;
    use async_trait::async_trait;

    struct Never;

    #[async_trait]
    impl RequirementPredicate for Never {
        async fn check(&self, _session: &dyn Session) -> bool {
            false
        }
    }

    #[test]
    fn builtin_registry_holds_all_builtin_names() {
        let registry = RequirementRegistry::with_builtin();

        assert_eq!(registry.len(), BuiltinRequirement::ALL.len());
        assert_eq!(registry.names(), vec!["admin", "logged", "notlogged"]);
    }

    #[test]
    fn register_rejects_duplicate_names() {
        let mut registry = RequirementRegistry::with_builtin();

        assert_eq!(
            registry.register("logged", Never),
            Err(RegisterRequirementError::DuplicateRequirement(
                "logged".to_string()
            ))
        );
        assert!(registry.register("beta-tester", Never).is_ok());
        assert!(registry.register("beta-tester", Never).is_err());
        assert!(registry.contains("beta-tester"));
    }

    #[test]
    fn duplicate_error_display_is_stable() {
        let error = RegisterRequirementError::DuplicateRequirement("admin".to_string());

        assert_eq!(error.to_string(), "requirement already registered: admin");
    }
}
