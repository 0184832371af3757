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

//! Requirement resolution for pending navigations.

use crate::guard::outcome::GuardOutcome;
use crate::guard::registry::RequirementRegistry;
use crate::guard::request::GuardRequest;
use crate::observability::events;
use crate::session::Session;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tracing::{debug, error};

const COMPONENT: &str = "guard_resolver";

/// Resolution failures. These are configuration bugs, never denials.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolveError {
    UnknownRequirement(String),
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::UnknownRequirement(name) => write!(f, "unknown requirement: {name}"),
        }
    }
}

impl Error for ResolveError {}

/// Evaluates guard requests against a shared [`RequirementRegistry`].
#[derive(Clone, Debug)]
pub struct GuardResolver {
    registry: Arc<RequirementRegistry>,
}

impl GuardResolver {
    pub fn new(registry: Arc<RequirementRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RequirementRegistry {
        &self.registry
    }

    /// Resolves `request` in order, stopping at the first failing requirement.
    ///
    /// Names after the first failure are neither looked up nor evaluated. An
    /// empty request is allowed.
    pub async fn resolve(
        &self,
        request: &GuardRequest,
        session: &dyn Session,
    ) -> Result<GuardOutcome, ResolveError> {
        debug!(
            event = events::GUARD_RESOLVE_START,
            component = COMPONENT,
            requirements = %request,
            "resolving guard request"
        );

        for name in request.iter() {
            let Some(predicate) = self.registry.lookup(name) else {
                error!(
                    event = events::GUARD_UNKNOWN_REQUIREMENT,
                    component = COMPONENT,
                    requirement = name,
                    "route references an unregistered requirement"
                );
                return Err(ResolveError::UnknownRequirement(name.to_string()));
            };

            if !predicate.check(session).await {
                debug!(
                    event = events::GUARD_DENIED,
                    component = COMPONENT,
                    reason = name,
                    "guard request denied"
                );
                return Ok(GuardOutcome::Denied(name.to_string()));
            }
        }

        debug!(
            event = events::GUARD_ALLOWED,
            component = COMPONENT,
            requirements = %request,
            "guard request allowed"
        );
        Ok(GuardOutcome::Allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::{GuardResolver, ResolveError};
    use crate::guard::outcome::GuardOutcome;
    use crate::guard::registry::RequirementRegistry;
    use crate::guard::request::GuardRequest;
    use crate::guard::requirement::RequirementPredicate;
    use crate::session::Session;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FixedSession {
        logged: bool,
        admin: bool,
    }

    #[async_trait]
    impl Session for FixedSession {
        async fn is_logged(&self) -> bool {
            self.logged
        }

        async fn is_admin(&self) -> bool {
            self.admin
        }
    }

    #[derive(Default)]
    struct CountingPredicate {
        result: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RequirementPredicate for Arc<CountingPredicate> {
        async fn check(&self, _session: &dyn Session) -> bool {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.result
        }
    }

    fn logged_in_user() -> FixedSession {
        FixedSession {
            logged: true,
            admin: false,
        }
    }

    fn builtin_resolver() -> GuardResolver {
        GuardResolver::new(Arc::new(RequirementRegistry::with_builtin()))
    }

    #[tokio::test]
    async fn empty_request_is_allowed() {
        let resolver = builtin_resolver();

        let outcome = resolver
            .resolve(&GuardRequest::none(), &logged_in_user())
            .await;

        assert_eq!(outcome, Ok(GuardOutcome::Allowed));
    }

    #[tokio::test]
    async fn first_failing_requirement_is_the_reason() {
        let resolver = builtin_resolver();
        let request = GuardRequest::from_names(["logged", "admin", "notlogged"]);

        let outcome = resolver.resolve(&request, &logged_in_user()).await;

        assert_eq!(outcome, Ok(GuardOutcome::Denied("admin".to_string())));
    }

    #[tokio::test]
    async fn notlogged_denies_a_logged_in_session() {
        let resolver = builtin_resolver();

        let outcome = resolver
            .resolve(&GuardRequest::from("notlogged"), &logged_in_user())
            .await;

        assert_eq!(outcome, Ok(GuardOutcome::Denied("notlogged".to_string())));
    }

    #[tokio::test]
    async fn unregistered_requirement_is_an_error_not_a_denial() {
        let resolver = builtin_resolver();

        let outcome = resolver
            .resolve(&GuardRequest::from("unregistered"), &logged_in_user())
            .await;

        assert_eq!(
            outcome,
            Err(ResolveError::UnknownRequirement("unregistered".to_string()))
        );
    }

    #[tokio::test]
    async fn evaluation_stops_at_first_failure() {
        let failing = Arc::new(CountingPredicate::default());
        let trailing = Arc::new(CountingPredicate {
            result: true,
            ..Default::default()
        });
        let mut registry = RequirementRegistry::new();
        registry.register("failing", failing.clone()).unwrap();
        registry.register("trailing", trailing.clone()).unwrap();
        let resolver = GuardResolver::new(Arc::new(registry));

        let request = GuardRequest::from_names(["failing", "trailing", "never-registered"]);
        let outcome = resolver.resolve(&request, &logged_in_user()).await;

        assert_eq!(outcome, Ok(GuardOutcome::Denied("failing".to_string())));
        assert_eq!(failing.calls.load(Ordering::Relaxed), 1);
        assert_eq!(trailing.calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn all_passing_requirements_allow() {
        let resolver = builtin_resolver();
        let admin = FixedSession {
            logged: true,
            admin: true,
        };

        let outcome = resolver
            .resolve(&GuardRequest::from_names(["logged", "admin"]), &admin)
            .await;

        assert!(outcome.unwrap().is_allowed());
    }
}
