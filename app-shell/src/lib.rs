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

//! # app-shell
//!
//! `app-shell` is the client-side shell of a web application: it decides whether a
//! navigation may enter a route and keeps one global loading/error state for all
//! outbound HTTP calls.
//!
//! Typical usage is API-first and centered on [`AppShell`]. Internal modules are
//! organized by domain layer to keep behavior ownership explicit.
//!
//! ## Route guards
//!
//! ```
//! use app_shell::{AppShell, GuardOutcome, GuardRequest, Session};
//! use async_trait::async_trait;
//!
//! # struct LoggedIn;
//! #
//! # #[async_trait]
//! # impl Session for LoggedIn {
//! #     async fn is_logged(&self) -> bool {
//! #         true
//! #     }
//! #
//! #     async fn is_admin(&self) -> bool {
//! #         false
//! #     }
//! # }
//! #
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let shell = AppShell::client_template("web").unwrap();
//! let resolver = shell.resolver();
//!
//! let request = GuardRequest::from_names(["logged", "admin"]);
//! let outcome = resolver.resolve(&request, &LoggedIn).await.unwrap();
//! assert_eq!(outcome, GuardOutcome::Denied("admin".to_string()));
//!
//! assert!(resolver
//!     .resolve(&GuardRequest::none(), &LoggedIn)
//!     .await
//!     .unwrap()
//!     .is_allowed());
//!
//! // An unregistered name is a configuration bug, never a denial.
//! assert!(resolver
//!     .resolve(&GuardRequest::from("subscriber"), &LoggedIn)
//!     .await
//!     .is_err());
//! # });
//! ```
//!
//! ## Request activity
//!
//! ```
//! use app_shell::{AppShell, ActivityStatus};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let shell = AppShell::client_template("web").unwrap();
//! let activity = shell.activity().clone();
//!
//! let first = activity.wrap(async { Ok::<_, String>("profile") });
//! let second = activity.wrap(async { Err::<&str, _>("503".to_string()) });
//! let (first, second) = futures::join!(first, second);
//!
//! assert_eq!(first, Ok("profile"));
//! assert_eq!(second, Err("503".to_string()));
//!
//! let snapshot = activity.snapshot();
//! assert_eq!(snapshot.pending, 0);
//! assert_eq!(snapshot.status, ActivityStatus::Idle);
//! assert!(snapshot.error_signaled());
//! # });
//! ```
//!
//! ## Architecture
//!
//! - API facade: outward `AppShell` surface and startup validation
//! - Guard: requirement registry, guard requests and the short-circuit resolver
//! - Navigation: route table, denial fallbacks and the navigator
//! - Activity: request-activity coordinator and the coordinated HTTP transport
//!
//! ## Observability
//!
//! The workspace uses `tracing` for logs/events.
//! Library code emits events and does not initialize a global subscriber.
//! Binaries and tests are responsible for one-time `tracing_subscriber`
//! initialization at process boundaries.

mod activity;
pub use activity::coordinator::{ActivityCoordinator, CallError};
pub use activity::state::{ActivitySnapshot, ActivityStatus, ErrorSignal, HTTP_ERROR_MARKER};
pub use activity::transport::{
    CoordinatedTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError,
};

mod guard;
pub use guard::outcome::GuardOutcome;
pub use guard::registry::{RegisterRequirementError, RequirementRegistry};
pub use guard::request::GuardRequest;
pub use guard::requirement::{BuiltinRequirement, RequirementPredicate, UnknownBuiltinRequirement};
pub use guard::resolver::{GuardResolver, ResolveError};

mod navigation;
pub use navigation::event::NavigationEvent;
pub use navigation::fallback::{FallbackTable, UnmappedDenialError};
pub use navigation::navigator::{
    HopCause, Navigation, NavigationError, Navigator, RedirectHop, DEFAULT_MAX_REDIRECTS,
};
pub use navigation::route_table::{
    RouteDefinition, RouteTable, UnregisteredRouteRequirement, NOT_FOUND_VIEW,
};

#[doc(hidden)]
pub mod observability;

mod session;
pub use session::Session;

mod shell;
pub use shell::{AppShell, ShellConfigError};
