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

//! Canonical structured field keys and value-format helpers.

use crate::navigation::navigator::{HopCause, RedirectHop};

pub const EVENT: &str = "event";
pub const COMPONENT: &str = "component";
pub const SHELL_NAME: &str = "shell_name";

pub const PATH: &str = "path";
pub const REQUESTED: &str = "requested";
pub const VIEW: &str = "view";
pub const HOPS: &str = "hops";
pub const FALLBACK: &str = "fallback";

pub const REQUIREMENT: &str = "requirement";
pub const REQUIREMENTS: &str = "requirements";
pub const REASON: &str = "reason";

pub const CALL_ID: &str = "call_id";
pub const PENDING: &str = "pending";
pub const STATUS: &str = "status";
pub const MARKER: &str = "marker";
pub const ERR: &str = "err";

pub const NONE: &str = "none";
pub const CAUSE_REDIRECT: &str = "redirect";

/// Renders a redirect chain as `from->to(cause)` segments.
pub fn format_hops(hops: &[RedirectHop]) -> String {
    if hops.is_empty() {
        return NONE.to_string();
    }

    hops.iter()
        .map(|hop| {
            let cause = match &hop.cause {
                HopCause::Redirect => CAUSE_REDIRECT,
                HopCause::Denied(reason) => reason.as_str(),
            };
            format!("{}->{}({cause})", hop.from, hop.to)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
