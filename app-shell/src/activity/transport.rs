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

//! HTTP transport capability and its coordinated wrapper.

use crate::activity::coordinator::ActivityCoordinator;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.to_string(),
            body: None,
        }
    }

    pub fn post(path: &str, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.to_string(),
            body: Some(body.into()),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport failures, including non-success HTTP statuses.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TransportError {
    /// The server answered with a non-success status.
    Status { status: u16, body: String },
    /// The request never produced a response.
    Unreachable(String),
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Status { status, .. } => {
                write!(f, "request failed with status {status}")
            }
            TransportError::Unreachable(reason) => write!(f, "request failed: {reason}"),
        }
    }
}

impl Error for TransportError {}

/// Capability performing one HTTP exchange.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

///
/// [`CoordinatedTransport`] routes every request of an inner transport through an
/// [`ActivityCoordinator`].
///
/// Non-success statuses are reported as [`TransportError::Status`] so the
/// coordinator sees them as failures.
pub struct CoordinatedTransport<T> {
    inner: T,
    coordinator: ActivityCoordinator,
}

impl<T: HttpTransport> CoordinatedTransport<T> {
    pub fn new(inner: T, coordinator: ActivityCoordinator) -> Self {
        Self { inner, coordinator }
    }

    pub fn coordinator(&self) -> &ActivityCoordinator {
        &self.coordinator
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for CoordinatedTransport<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.coordinator
            .wrap(async {
                let response = self.inner.send(request).await?;
                if response.is_success() {
                    Ok(response)
                } else {
                    Err(TransportError::Status {
                        status: response.status,
                        body: response.body,
                    })
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CoordinatedTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
        TransportError,
    };
    use crate::activity::coordinator::ActivityCoordinator;
    use crate::activity::state::ActivityStatus;
    use async_trait::async_trait;

    struct FixedStatusTransport(u16);

    #[async_trait]
    impl HttpTransport for FixedStatusTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse {
                status: self.0,
                body: request.body.unwrap_or_default(),
            })
        }
    }

    #[test]
    fn request_builders_set_method() {
        let get = HttpRequest::get("/_/profile");
        let post = HttpRequest::post("/_/feedback", "hola");

        assert_eq!(format!("{} {}", get.method, get.path), "GET /_/profile");
        assert_eq!(post.method, HttpMethod::Post);
        assert_eq!(post.body.as_deref(), Some("hola"));
    }

    #[tokio::test]
    async fn success_status_passes_through() {
        let coordinator = ActivityCoordinator::new();
        let transport = CoordinatedTransport::new(FixedStatusTransport(201), coordinator.clone());

        let response = transport
            .send(HttpRequest::post("/_/feedback", "hola"))
            .await
            .unwrap();

        assert_eq!(response.body, "hola");
        assert!(!coordinator.snapshot().error_signaled());
    }

    #[tokio::test]
    async fn error_status_raises_error_register() {
        let coordinator = ActivityCoordinator::new();
        let transport = CoordinatedTransport::new(FixedStatusTransport(500), coordinator.clone());

        let result = transport.send(HttpRequest::get("/_/profile")).await;

        assert_eq!(
            result,
            Err(TransportError::Status {
                status: 500,
                body: String::new(),
            })
        );
        let snapshot = coordinator.snapshot();
        assert_eq!(snapshot.status, ActivityStatus::Idle);
        assert!(snapshot.error_signaled());
    }
}
