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

use app_shell::Session;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Session with fixed answers that counts how often it was queried.
#[derive(Debug, Default)]
pub struct StaticSession {
    logged: AtomicBool,
    admin: AtomicBool,
    queries: AtomicUsize,
}

impl StaticSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn logged_in() -> Self {
        Self::new(true, false)
    }

    pub fn administrator() -> Self {
        Self::new(true, true)
    }

    pub fn new(logged: bool, admin: bool) -> Self {
        Self {
            logged: AtomicBool::new(logged),
            admin: AtomicBool::new(admin),
            queries: AtomicUsize::new(0),
        }
    }

    /// Simulates a login or logout between navigations.
    pub fn set_logged(&self, logged: bool) {
        self.logged.store(logged, Ordering::SeqCst);
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Session for StaticSession {
    async fn is_logged(&self) -> bool {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.logged.load(Ordering::SeqCst)
    }

    async fn is_admin(&self) -> bool {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.admin.load(Ordering::SeqCst)
    }
}
