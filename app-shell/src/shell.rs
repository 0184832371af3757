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

//! Outward facade that wires the guard, navigation and activity layers.

use crate::activity::coordinator::ActivityCoordinator;
use crate::activity::transport::{CoordinatedTransport, HttpTransport};
use crate::guard::registry::{RegisterRequirementError, RequirementRegistry};
use crate::guard::resolver::GuardResolver;
use crate::navigation::event::NavigationEvent;
use crate::navigation::fallback::{FallbackTable, UnmappedDenialError};
use crate::navigation::navigator::{Navigation, NavigationError, Navigator};
use crate::navigation::route_table::{RouteTable, UnregisteredRouteRequirement};
use crate::observability::events;
use crate::session::Session;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tokio::sync::broadcast::Receiver;
use tracing::{error, info};

const COMPONENT: &str = "app_shell";

/// Startup configuration errors. A shell that fails validation is never built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShellConfigError {
    /// A route names a requirement missing from the registry. `path` is `None`
    /// for the otherwise route.
    UnknownRequirement { path: Option<String>, name: String },
    /// A registered requirement has no fallback path.
    UnmappedDenial(String),
    Registration(RegisterRequirementError),
}

impl Display for ShellConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellConfigError::UnknownRequirement {
                path: Some(path),
                name,
            } => write!(f, "route {path} references unknown requirement: {name}"),
            ShellConfigError::UnknownRequirement { path: None, name } => {
                write!(f, "otherwise route references unknown requirement: {name}")
            }
            ShellConfigError::UnmappedDenial(name) => {
                write!(f, "requirement {name} has no fallback route")
            }
            ShellConfigError::Registration(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ShellConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ShellConfigError::Registration(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RegisterRequirementError> for ShellConfigError {
    fn from(err: RegisterRequirementError) -> Self {
        ShellConfigError::Registration(err)
    }
}

impl From<UnregisteredRouteRequirement> for ShellConfigError {
    fn from(err: UnregisteredRouteRequirement) -> Self {
        ShellConfigError::UnknownRequirement {
            path: err.path,
            name: err.requirement,
        }
    }
}

impl From<UnmappedDenialError> for ShellConfigError {
    fn from(err: UnmappedDenialError) -> Self {
        ShellConfigError::UnmappedDenial(err.0)
    }
}

///
/// [`AppShell`] is the validated application shell: one navigator guarding the
/// route table and one activity coordinator shared by every outbound call.
///
/// # Examples
///
/// ```
/// use app_shell::{AppShell, FallbackTable, RequirementRegistry, RouteTable};
///
/// let registry = RequirementRegistry::with_builtin();
///
/// // A fallback table that cannot answer a "logged" denial is rejected.
/// let mut fallbacks = FallbackTable::new();
/// fallbacks.insert("notlogged", "/");
/// fallbacks.insert("admin", "/");
///
/// assert!(AppShell::new("web", registry, RouteTable::client_template(), fallbacks).is_err());
/// ```
pub struct AppShell {
    name: String,
    navigator: Navigator,
    activity: ActivityCoordinator,
}

impl AppShell {
    /// Validates the configuration and builds the shell.
    ///
    /// # Errors
    ///
    /// Returns [`ShellConfigError::UnknownRequirement`] if a route names a
    /// requirement missing from `registry`, and [`ShellConfigError::UnmappedDenial`]
    /// if a registered requirement has no entry in `fallbacks`.
    pub fn new(
        name: &str,
        registry: RequirementRegistry,
        routes: RouteTable,
        fallbacks: FallbackTable,
    ) -> Result<Self, ShellConfigError> {
        let validated = routes
            .validate(&registry)
            .map_err(ShellConfigError::from)
            .and_then(|_| fallbacks.validate(&registry).map_err(ShellConfigError::from));

        if let Err(err) = validated {
            error!(
                event = events::SHELL_CONFIG_INVALID,
                component = COMPONENT,
                shell_name = name,
                err = %err,
                "rejecting shell configuration"
            );
            return Err(err);
        }

        info!(
            event = events::SHELL_CREATE_OK,
            component = COMPONENT,
            shell_name = name,
            requirements = registry.len(),
            routes = routes.len(),
            "app shell created"
        );

        let resolver = GuardResolver::new(Arc::new(registry));
        Ok(Self {
            name: name.to_string(),
            navigator: Navigator::new(resolver, routes, fallbacks),
            activity: ActivityCoordinator::new(),
        })
    }

    /// Shell built from the built-in requirements, their default fallbacks and
    /// the client template routes.
    pub fn client_template(name: &str) -> Result<Self, ShellConfigError> {
        Self::new(
            name,
            RequirementRegistry::with_builtin(),
            RouteTable::client_template(),
            FallbackTable::with_builtin_defaults(),
        )
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.navigator = self.navigator.with_max_redirects(max_redirects);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn resolver(&self) -> &GuardResolver {
        self.navigator.resolver()
    }

    pub fn activity(&self) -> &ActivityCoordinator {
        &self.activity
    }

    pub fn subscribe_navigation(&self) -> Receiver<NavigationEvent> {
        self.navigator.subscribe_events()
    }

    pub async fn navigate(
        &self,
        path: &str,
        session: &dyn Session,
    ) -> Result<Navigation, NavigationError> {
        self.navigator.navigate(path, session).await
    }

    /// Wraps `inner` so its exchanges drive this shell's activity state.
    pub fn coordinated_transport<T: HttpTransport>(&self, inner: T) -> CoordinatedTransport<T> {
        CoordinatedTransport::new(inner, self.activity.clone())
    }
}
