//! Activity layer.
//!
//! Owns the request-activity coordinator that folds any number of concurrent
//! outbound calls into one loading indicator and one error register, plus the
//! transport wrapper that sends every HTTP exchange through it.
//!
//! ```
//! use app_shell::{
//!     ActivityCoordinator, ActivityStatus, CoordinatedTransport, HttpRequest, HttpResponse,
//!     HttpTransport, TransportError,
//! };
//! use async_trait::async_trait;
//!
//! # struct Offline;
//! #
//! # #[async_trait]
//! # impl HttpTransport for Offline {
//! #     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
//! #         Err(TransportError::Unreachable("offline".to_string()))
//! #     }
//! # }
//! #
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let coordinator = ActivityCoordinator::new();
//! let transport = CoordinatedTransport::new(Offline, coordinator.clone());
//!
//! // The caller still sees the failure and can restore its form input.
//! assert!(transport.send(HttpRequest::post("/_/feedback", "hello")).await.is_err());
//!
//! let snapshot = coordinator.snapshot();
//! assert_eq!(snapshot.status, ActivityStatus::Idle);
//! assert!(snapshot.error_signaled());
//! # });
//! ```

pub(crate) mod coordinator;
pub(crate) mod state;
pub(crate) mod transport;
