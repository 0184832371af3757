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

//! Route-table data model for guarded navigation targets.

use crate::guard::registry::RequirementRegistry;
use crate::guard::request::GuardRequest;
use crate::guard::requirement::BuiltinRequirement;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const NOT_FOUND_VIEW: &str = "stuff/404";

/// What a path resolves to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RouteDefinition {
    /// Shows `view` once every requirement passes.
    View {
        view: String,
        requirements: GuardRequest,
    },
    /// Sends the navigation on to another path without evaluating guards.
    Redirect { to: String },
}

impl RouteDefinition {
    pub fn view(view: &str) -> Self {
        RouteDefinition::View {
            view: view.to_string(),
            requirements: GuardRequest::none(),
        }
    }

    pub fn guarded_view(view: &str, requirements: impl Into<GuardRequest>) -> Self {
        RouteDefinition::View {
            view: view.to_string(),
            requirements: requirements.into(),
        }
    }

    pub fn redirect(to: &str) -> Self {
        RouteDefinition::Redirect { to: to.to_string() }
    }

    fn requirements(&self) -> Option<&GuardRequest> {
        match self {
            RouteDefinition::View { requirements, .. } => Some(requirements),
            RouteDefinition::Redirect { .. } => None,
        }
    }
}

/// A route that references a requirement missing from the registry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnregisteredRouteRequirement {
    /// `None` for the otherwise route.
    pub path: Option<String>,
    pub requirement: String,
}

impl Display for UnregisteredRouteRequirement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(
                f,
                "route {path} references unknown requirement: {}",
                self.requirement
            ),
            None => write!(
                f,
                "otherwise route references unknown requirement: {}",
                self.requirement
            ),
        }
    }
}

impl Error for UnregisteredRouteRequirement {}

/// Path-keyed route definitions plus the route used for unknown paths.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: HashMap<String, RouteDefinition>,
    otherwise: RouteDefinition,
}

impl RouteTable {
    pub fn new(otherwise: RouteDefinition) -> Self {
        Self {
            routes: HashMap::new(),
            otherwise,
        }
    }

    /// Routes generated for a fresh client project.
    pub fn client_template() -> Self {
        let mut table = Self::new(RouteDefinition::view(NOT_FOUND_VIEW));
        table.insert_route("/", RouteDefinition::redirect("/enroll/introduction"));
        table.insert_route(
            "/accounts/login",
            RouteDefinition::guarded_view("accounts/login", BuiltinRequirement::NotLogged),
        );
        table
    }

    /// Inserts a route. Returns `true` only when `path` was not yet defined.
    pub fn insert_route(&mut self, path: &str, definition: RouteDefinition) -> bool {
        if self.routes.contains_key(path) {
            return false;
        }
        self.routes.insert(path.to_string(), definition);
        true
    }

    /// Returns the definition for `path`, or the otherwise route.
    pub fn lookup(&self, path: &str) -> &RouteDefinition {
        self.routes.get(path).unwrap_or(&self.otherwise)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Checks that every requirement named by a route is registered.
    pub fn validate(
        &self,
        registry: &RequirementRegistry,
    ) -> Result<(), UnregisteredRouteRequirement> {
        let mut paths: Vec<&String> = self.routes.keys().collect();
        paths.sort_unstable();

        let defined = paths
            .into_iter()
            .map(|path| (Some(path.as_str()), &self.routes[path]));
        let otherwise = std::iter::once((None, &self.otherwise));

        for (path, definition) in defined.chain(otherwise) {
            let Some(requirements) = definition.requirements() else {
                continue;
            };
            if let Some(missing) = requirements.iter().find(|name| !registry.contains(name)) {
                return Err(UnregisteredRouteRequirement {
                    path: path.map(str::to_string),
                    requirement: missing.to_string(),
                });
            }
        }

        Ok(())
    }
}
