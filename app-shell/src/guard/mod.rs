//! Guard layer.
//!
//! Owns the requirement registry and the resolver that decides whether a pending
//! navigation may proceed. Resolution is strictly ordered and stops at the first
//! failing requirement; a name missing from the registry is reported as an error
//! and never folded into a denial.
//!
//! ```
//! use std::sync::Arc;
//! use app_shell::{GuardOutcome, GuardRequest, GuardResolver, RequirementRegistry, Session};
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
//! let resolver = GuardResolver::new(Arc::new(RequirementRegistry::with_builtin()));
//!
//! let outcome = resolver
//!     .resolve(&GuardRequest::from_names(["logged", "admin"]), &LoggedIn)
//!     .await
//!     .unwrap();
//! assert_eq!(outcome, GuardOutcome::Denied("admin".to_string()));
//!
//! assert!(resolver
//!     .resolve(&GuardRequest::from("unregistered"), &LoggedIn)
//!     .await
//!     .is_err());
//! # });
//! ```

pub(crate) mod outcome;
pub(crate) mod registry;
pub(crate) mod request;
pub(crate) mod requirement;
pub(crate) mod resolver;
