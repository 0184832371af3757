//! Navigation layer.
//!
//! Owns the route table, the deny-reason fallback table and the navigator that
//! consults the guard layer before activating a view. Denials are turned into
//! redirects through the fallback table; a reason without a fallback, an
//! unregistered requirement or a redirect cycle aborts the navigation.
//!
//! ```
//! use std::sync::Arc;
//! use app_shell::{
//!     FallbackTable, GuardResolver, Navigator, RequirementRegistry, RouteDefinition,
//!     RouteTable, Session,
//! };
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
//! let mut routes = RouteTable::client_template();
//! routes.insert_route("/enroll/introduction", RouteDefinition::view("enroll/introduction"));
//!
//! let resolver = GuardResolver::new(Arc::new(RequirementRegistry::with_builtin()));
//! let navigator = Navigator::new(resolver, routes, FallbackTable::with_builtin_defaults());
//!
//! // A logged-in user is bounced off the login page to the home page, which
//! // itself redirects to the enrollment introduction.
//! let navigation = navigator.navigate("/accounts/login", &LoggedIn).await.unwrap();
//! assert_eq!(navigation.path, "/enroll/introduction");
//! assert_eq!(navigation.hops.len(), 2);
//! # });
//! ```

pub(crate) mod event;
pub(crate) mod fallback;
pub(crate) mod navigator;
pub(crate) mod route_table;
