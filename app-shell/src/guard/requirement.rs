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

//! Requirement predicates and the closed set of built-in requirements.

use crate::session::Session;
use async_trait::async_trait;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A precondition a session must satisfy before a navigation may proceed.
#[async_trait]
pub trait RequirementPredicate: Send + Sync {
    /// Evaluates the precondition against `session`.
    async fn check(&self, session: &dyn Session) -> bool;
}

/// Requirements shipped with the client shell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BuiltinRequirement {
    /// Only anonymous visitors may enter (login and sign-up pages).
    NotLogged,
    /// Only authenticated users may enter.
    Logged,
    /// Only administrators may enter.
    Admin,
}

impl BuiltinRequirement {
    pub const ALL: [BuiltinRequirement; 3] = [
        BuiltinRequirement::NotLogged,
        BuiltinRequirement::Logged,
        BuiltinRequirement::Admin,
    ];

    /// Registry name used by route definitions.
    pub const fn name(self) -> &'static str {
        match self {
            BuiltinRequirement::NotLogged => "notlogged",
            BuiltinRequirement::Logged => "logged",
            BuiltinRequirement::Admin => "admin",
        }
    }

    /// Destination a denied navigation is sent to.
    ///
    /// Authenticated users bounced from an anonymous-only page land on the
    /// home page, never on the login page they already passed.
    pub const fn default_fallback(self) -> &'static str {
        match self {
            BuiltinRequirement::NotLogged => "/",
            BuiltinRequirement::Logged => "/accounts/login",
            BuiltinRequirement::Admin => "/",
        }
    }
}

impl Display for BuiltinRequirement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to parse a built-in requirement name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownBuiltinRequirement(pub String);

impl Display for UnknownBuiltinRequirement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a built-in requirement: {}", self.0)
    }
}

impl std::error::Error for UnknownBuiltinRequirement {}

impl FromStr for BuiltinRequirement {
    type Err = UnknownBuiltinRequirement;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        BuiltinRequirement::ALL
            .into_iter()
            .find(|requirement| requirement.name() == name)
            .ok_or_else(|| UnknownBuiltinRequirement(name.to_string()))
    }
}

#[async_trait]
impl RequirementPredicate for BuiltinRequirement {
    async fn check(&self, session: &dyn Session) -> bool {
        match self {
            BuiltinRequirement::NotLogged => !session.is_logged().await,
            BuiltinRequirement::Logged => session.is_logged().await,
            BuiltinRequirement::Admin => session.is_admin().await,
        }
    }
}
