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

//! Guarded navigation over a route table.

use crate::guard::outcome::GuardOutcome;
use crate::guard::resolver::{GuardResolver, ResolveError};
use crate::navigation::event::NavigationEvent;
use crate::navigation::fallback::{FallbackTable, UnmappedDenialError};
use crate::navigation::route_table::{RouteDefinition, RouteTable};
use crate::observability::{events, fields};
use crate::session::Session;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tokio::sync::broadcast::{self, Receiver, Sender};
use tracing::{debug, error, info};

const COMPONENT: &str = "navigator";

pub const DEFAULT_MAX_REDIRECTS: usize = 8;
const NAVIGATION_EVENT_CAPACITY: usize = 64;

/// Navigation failures. Each one is a configuration bug.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NavigationError {
    UnknownRequirement { path: String, requirement: String },
    UnmappedDenial(UnmappedDenialError),
    RedirectLoop { requested: String, hops: usize },
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationError::UnknownRequirement { path, requirement } => {
                write!(f, "route {path} references unknown requirement: {requirement}")
            }
            NavigationError::UnmappedDenial(err) => write!(f, "{err}"),
            NavigationError::RedirectLoop { requested, hops } => {
                write!(f, "navigation to {requested} exceeded {hops} redirects")
            }
        }
    }
}

impl Error for NavigationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NavigationError::UnmappedDenial(err) => Some(err),
            _ => None,
        }
    }
}

/// Why a navigation moved on from one path to another.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HopCause {
    /// The route is a plain redirect.
    Redirect,
    /// The named requirement failed and its fallback was followed.
    Denied(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RedirectHop {
    pub from: String,
    pub to: String,
    pub cause: HopCause,
}

/// Where a navigation ended up.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Navigation {
    pub requested: String,
    pub path: String,
    pub view: String,
    pub hops: Vec<RedirectHop>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.hops.is_empty()
    }
}

/// Resolves paths against a route table, consulting the guard resolver before
/// activating a view and following fallbacks on denial.
pub struct Navigator {
    resolver: GuardResolver,
    routes: RouteTable,
    fallbacks: FallbackTable,
    max_redirects: usize,
    events: Sender<NavigationEvent>,
}

impl Navigator {
    pub fn new(resolver: GuardResolver, routes: RouteTable, fallbacks: FallbackTable) -> Self {
        let (events, _) = broadcast::channel(NAVIGATION_EVENT_CAPACITY);
        Self {
            resolver,
            routes,
            fallbacks,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            events,
        }
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn resolver(&self) -> &GuardResolver {
        &self.resolver
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn fallbacks(&self) -> &FallbackTable {
        &self.fallbacks
    }

    pub fn subscribe_events(&self) -> Receiver<NavigationEvent> {
        self.events.subscribe()
    }

    /// Navigates to `requested`, following redirects and denial fallbacks until a
    /// view is activated.
    pub async fn navigate(
        &self,
        requested: &str,
        session: &dyn Session,
    ) -> Result<Navigation, NavigationError> {
        let mut current = requested.to_string();
        let mut hops: Vec<RedirectHop> = Vec::new();

        loop {
            self.publish(NavigationEvent::Start {
                path: current.clone(),
            });
            debug!(
                event = events::NAVIGATION_START,
                component = COMPONENT,
                path = current.as_str(),
                "navigation started"
            );

            let (next, cause) = match self.routes.lookup(&current) {
                RouteDefinition::Redirect { to } => (to.clone(), HopCause::Redirect),
                RouteDefinition::View { view, requirements } => {
                    let outcome = self
                        .resolver
                        .resolve(requirements, session)
                        .await
                        .map_err(|ResolveError::UnknownRequirement(requirement)| {
                            error!(
                                event = events::NAVIGATION_FAILED,
                                component = COMPONENT,
                                path = current.as_str(),
                                requirement = requirement.as_str(),
                                "navigation aborted on unknown requirement"
                            );
                            NavigationError::UnknownRequirement {
                                path: current.clone(),
                                requirement,
                            }
                        })?;

                    match outcome {
                        GuardOutcome::Allowed => {
                            info!(
                                event = events::NAVIGATION_OK,
                                component = COMPONENT,
                                requested,
                                path = current.as_str(),
                                view = view.as_str(),
                                hops = %fields::format_hops(&hops),
                                "navigation succeeded"
                            );
                            self.publish(NavigationEvent::Success {
                                path: current.clone(),
                                view: view.clone(),
                            });
                            return Ok(Navigation {
                                requested: requested.to_string(),
                                path: current,
                                view: view.clone(),
                                hops,
                            });
                        }
                        GuardOutcome::Denied(reason) => {
                            self.publish(NavigationEvent::Error {
                                path: current.clone(),
                                reason: reason.clone(),
                            });
                            let fallback = self.fallbacks.fallback_for(&reason).map_err(|err| {
                                error!(
                                    event = events::NAVIGATION_UNMAPPED_DENIAL,
                                    component = COMPONENT,
                                    path = current.as_str(),
                                    reason = reason.as_str(),
                                    "denial reason has no fallback route"
                                );
                                NavigationError::UnmappedDenial(err)
                            })?;
                            debug!(
                                event = events::NAVIGATION_DENIED,
                                component = COMPONENT,
                                path = current.as_str(),
                                reason = reason.as_str(),
                                fallback,
                                "navigation denied; following fallback"
                            );
                            (fallback.to_string(), HopCause::Denied(reason))
                        }
                    }
                }
            };

            if hops.len() >= self.max_redirects {
                error!(
                    event = events::NAVIGATION_REDIRECT_LOOP,
                    component = COMPONENT,
                    requested,
                    hops = hops.len(),
                    "navigation exceeded redirect limit"
                );
                return Err(NavigationError::RedirectLoop {
                    requested: requested.to_string(),
                    hops: hops.len(),
                });
            }

            debug!(
                event = events::NAVIGATION_REDIRECT,
                component = COMPONENT,
                from = current.as_str(),
                to = next.as_str(),
                "navigation redirected"
            );
            hops.push(RedirectHop {
                from: std::mem::replace(&mut current, next.clone()),
                to: next,
                cause,
            });
        }
    }

    fn publish(&self, event: NavigationEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
