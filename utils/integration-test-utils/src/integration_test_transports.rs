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

use app_shell::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

/// Canned reply for one request path.
#[derive(Clone, Debug)]
pub enum ScriptedReply {
    Respond {
        status: u16,
        body: String,
        delay: Duration,
    },
    Unreachable {
        delay: Duration,
    },
}

impl ScriptedReply {
    pub fn ok(body: &str, delay: Duration) -> Self {
        ScriptedReply::Respond {
            status: 200,
            body: body.to_string(),
            delay,
        }
    }

    pub fn status(status: u16, delay: Duration) -> Self {
        ScriptedReply::Respond {
            status,
            body: String::new(),
            delay,
        }
    }

    fn delay(&self) -> Duration {
        match self {
            ScriptedReply::Respond { delay, .. } | ScriptedReply::Unreachable { delay } => *delay,
        }
    }
}

/// Transport answering each path with a scripted reply after a scripted delay.
///
/// Paths without a script answer `404`.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: HashMap<String, ScriptedReply>,
    sent: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(mut self, path: &str, reply: ScriptedReply) -> Self {
        self.replies.insert(path.to_string(), reply);
        self
    }

    pub fn sent(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.fetch_add(1, Ordering::SeqCst);

        let Some(reply) = self.replies.get(&request.path).cloned() else {
            debug!("no scripted reply for {} {}", request.method, request.path);
            return Ok(HttpResponse {
                status: 404,
                body: String::new(),
            });
        };

        tokio::time::sleep(reply.delay()).await;

        match reply {
            ScriptedReply::Respond { status, body, .. } => Ok(HttpResponse { status, body }),
            ScriptedReply::Unreachable { .. } => {
                Err(TransportError::Unreachable(format!("{} is down", request.path)))
            }
        }
    }
}
