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

use app_shell::{
    AppShell, BuiltinRequirement, FallbackTable, GuardRequest, RequirementRegistry,
    RouteDefinition, RouteTable, ShellConfigError, UnknownBuiltinRequirement,
    DEFAULT_MAX_REDIRECTS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub(crate) app_shell_config: AppShellConfig,
    pub(crate) requirements: RequirementsConfig,
    pub(crate) routes: Vec<RouteConfig>,
    pub(crate) otherwise: OtherwiseConfig,
    #[serde(default)]
    pub(crate) session: SessionConfig,
    #[serde(default)]
    pub(crate) calls: Vec<CallConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct AppShellConfig {
    pub(crate) name: String,
    #[serde(default = "default_max_redirects")]
    pub(crate) max_redirects: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RequirementsConfig {
    /// Built-in requirements to register, in registration order.
    #[serde(default = "all_builtin_requirements")]
    pub(crate) enabled: Vec<String>,
    /// Deny reason to fallback path.
    pub(crate) fallbacks: BTreeMap<String, String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    pub(crate) path: String,
    #[serde(default)]
    pub(crate) view: Option<String>,
    #[serde(default)]
    pub(crate) redirect_to: Option<String>,
    #[serde(default)]
    pub(crate) requirements: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct OtherwiseConfig {
    pub(crate) view: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default)]
    pub(crate) logged: bool,
    #[serde(default)]
    pub(crate) admin: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CallConfig {
    pub(crate) label: String,
    #[serde(default)]
    pub(crate) delay_ms: u64,
    #[serde(default)]
    pub(crate) fail: bool,
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn all_builtin_requirements() -> Vec<String> {
    BuiltinRequirement::ALL
        .iter()
        .map(|requirement| requirement.name().to_string())
        .collect()
}

#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(String),
    UnknownRequirement(UnknownBuiltinRequirement),
    /// A route must name exactly one of `view` and `redirect_to`.
    AmbiguousRoute(String),
    /// A redirect route cannot carry requirements.
    GuardedRedirect(String),
    DuplicateRoute(String),
    Shell(ShellConfigError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read(err) => write!(f, "unable to read config file: {err}"),
            ConfigError::Parse(reason) => write!(f, "unable to parse config file: {reason}"),
            ConfigError::UnknownRequirement(err) => write!(f, "{err}"),
            ConfigError::AmbiguousRoute(path) => write!(
                f,
                "route {path} must set exactly one of `view` and `redirect_to`"
            ),
            ConfigError::GuardedRedirect(path) => {
                write!(f, "redirect route {path} cannot declare requirements")
            }
            ConfigError::DuplicateRoute(path) => write!(f, "duplicate route path: {path}"),
            ConfigError::Shell(err) => write!(f, "invalid shell configuration: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Read(err) => Some(err),
            ConfigError::UnknownRequirement(err) => Some(err),
            ConfigError::Shell(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShellConfigError> for ConfigError {
    fn from(err: ShellConfigError) -> Self {
        ConfigError::Shell(err)
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        json5::from_str(contents).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Builds and validates the shell described by this configuration.
    pub fn build_shell(&self) -> Result<AppShell, ConfigError> {
        let registry = self.requirements.registry()?;
        let routes = self.route_table()?;

        let mut fallbacks = FallbackTable::new();
        for (reason, path) in &self.requirements.fallbacks {
            fallbacks.insert(reason, path);
        }

        let shell = AppShell::new(&self.app_shell_config.name, registry, routes, fallbacks)?;
        Ok(shell.with_max_redirects(self.app_shell_config.max_redirects))
    }

    fn route_table(&self) -> Result<RouteTable, ConfigError> {
        let mut routes = RouteTable::new(RouteDefinition::view(&self.otherwise.view));
        for route in &self.routes {
            if !routes.insert_route(&route.path, route.definition()?) {
                return Err(ConfigError::DuplicateRoute(route.path.clone()));
            }
        }
        Ok(routes)
    }
}

impl RequirementsConfig {
    fn registry(&self) -> Result<RequirementRegistry, ConfigError> {
        let mut registry = RequirementRegistry::new();
        for name in &self.enabled {
            let requirement =
                BuiltinRequirement::from_str(name).map_err(ConfigError::UnknownRequirement)?;
            registry
                .register(requirement.name(), requirement)
                .map_err(ShellConfigError::from)?;
        }
        Ok(registry)
    }
}

impl RouteConfig {
    fn definition(&self) -> Result<RouteDefinition, ConfigError> {
        match (&self.view, &self.redirect_to) {
            (Some(view), None) => Ok(RouteDefinition::guarded_view(
                view,
                GuardRequest::from_names(&self.requirements),
            )),
            (None, Some(to)) if self.requirements.is_empty() => Ok(RouteDefinition::redirect(to)),
            (None, Some(_)) => Err(ConfigError::GuardedRedirect(self.path.clone())),
            _ => Err(ConfigError::AmbiguousRoute(self.path.clone())),
        }
    }
}
