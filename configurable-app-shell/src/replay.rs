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

//! Replays navigations and simulated calls against a configured shell.

use crate::config::{CallConfig, SessionConfig};
use app_shell::{ActivitySnapshot, AppShell, HopCause, Navigation, Session};
use async_trait::async_trait;
use futures::future::join_all;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

/// Session answering from the `session` config section.
pub(crate) struct ConfiguredSession {
    logged: bool,
    admin: bool,
}

impl From<&SessionConfig> for ConfiguredSession {
    fn from(config: &SessionConfig) -> Self {
        Self {
            logged: config.logged,
            admin: config.admin,
        }
    }
}

#[async_trait]
impl Session for ConfiguredSession {
    async fn is_logged(&self) -> bool {
        self.logged
    }

    async fn is_admin(&self) -> bool {
        self.admin
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct Report {
    pub(crate) shell: String,
    pub(crate) navigations: Vec<NavigationReport>,
    pub(crate) calls: Vec<CallReport>,
    pub(crate) activity: ActivityReport,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub(crate) enum NavigationReport {
    Resolved {
        requested: String,
        path: String,
        view: String,
        hops: Vec<HopReport>,
    },
    Failed {
        requested: String,
        error: String,
    },
}

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct HopReport {
    from: String,
    to: String,
    cause: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct CallReport {
    label: String,
    ok: bool,
}

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct ActivityReport {
    pending: usize,
    status: String,
    error_marker: Option<String>,
    error_occurrences: u64,
}

impl From<Navigation> for NavigationReport {
    fn from(navigation: Navigation) -> Self {
        NavigationReport::Resolved {
            requested: navigation.requested,
            path: navigation.path,
            view: navigation.view,
            hops: navigation
                .hops
                .into_iter()
                .map(|hop| HopReport {
                    from: hop.from,
                    to: hop.to,
                    cause: match hop.cause {
                        HopCause::Redirect => "redirect".to_string(),
                        HopCause::Denied(reason) => format!("denied:{reason}"),
                    },
                })
                .collect(),
        }
    }
}

impl From<ActivitySnapshot> for ActivityReport {
    fn from(snapshot: ActivitySnapshot) -> Self {
        Self {
            pending: snapshot.pending,
            status: snapshot.status.to_string(),
            error_marker: snapshot.error.map(|signal| signal.marker.to_string()),
            error_occurrences: snapshot.error.map_or(0, |signal| signal.occurrences),
        }
    }
}

pub(crate) async fn navigate_all(
    shell: &AppShell,
    session: &dyn Session,
    paths: &[String],
) -> Vec<NavigationReport> {
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        let report = match shell.navigate(path, session).await {
            Ok(navigation) => {
                info!("{path} -> {} ({})", navigation.path, navigation.view);
                NavigationReport::from(navigation)
            }
            Err(err) => {
                warn!("{path} failed: {err}");
                NavigationReport::Failed {
                    requested: path.clone(),
                    error: err.to_string(),
                }
            }
        };
        reports.push(report);
    }
    reports
}

/// Runs every configured call concurrently through the shell's coordinator.
pub(crate) async fn run_calls(shell: &AppShell, calls: &[CallConfig]) -> Vec<CallReport> {
    let activity = shell.activity();
    let runs = calls.iter().map(|call| async move {
        let result = activity
            .wrap(async {
                tokio::time::sleep(Duration::from_millis(call.delay_ms)).await;
                if call.fail {
                    Err(format!("{} failed", call.label))
                } else {
                    Ok(())
                }
            })
            .await;
        CallReport {
            label: call.label.clone(),
            ok: result.is_ok(),
        }
    });
    join_all(runs).await
}

#[cfg(test)]
mod tests {
    use super::{navigate_all, run_calls, ActivityReport, ConfiguredSession, NavigationReport};
    use crate::config::{CallConfig, Config, SessionConfig};

    const CONFIG: &str = r#"{
        app_shell_config: { name: "replay", max_redirects: 2 },
        requirements: {
            fallbacks: { notlogged: "/", logged: "/accounts/login", admin: "/" },
        },
        routes: [
            { path: "/", redirect_to: "/enroll/introduction" },
            { path: "/enroll/introduction", view: "enroll/introduction" },
            { path: "/accounts/login", view: "accounts/login", requirements: ["notlogged"] },
            { path: "/loop", redirect_to: "/loop" },
        ],
        otherwise: { view: "stuff/404" },
    }"#;

    fn call(label: &str, delay_ms: u64, fail: bool) -> CallConfig {
        CallConfig {
            label: label.to_string(),
            delay_ms,
            fail,
        }
    }

    #[tokio::test]
    async fn navigations_report_hops_and_failures() {
        let shell = Config::parse(CONFIG).unwrap().build_shell().unwrap();
        let session = ConfiguredSession::from(&SessionConfig {
            logged: true,
            admin: false,
        });
        let paths = vec!["/accounts/login".to_string(), "/loop".to_string()];

        let reports = navigate_all(&shell, &session, &paths).await;

        match &reports[0] {
            NavigationReport::Resolved { path, hops, .. } => {
                assert_eq!(path, "/enroll/introduction");
                assert_eq!(hops.len(), 2);
                assert_eq!(hops[0].cause, "denied:notlogged");
            }
            other => panic!("unexpected report: {other:?}"),
        }
        assert!(matches!(&reports[1], NavigationReport::Failed { requested, .. } if requested == "/loop"));
    }

    #[tokio::test(start_paused = true)]
    async fn calls_settle_into_one_activity_state() {
        let shell = Config::parse(CONFIG).unwrap().build_shell().unwrap();
        let calls = vec![
            call("profile", 10, false),
            call("feedback", 30, true),
            call("enrollment", 20, false),
        ];

        let reports = run_calls(&shell, &calls).await;

        assert_eq!(
            reports.iter().map(|report| report.ok).collect::<Vec<_>>(),
            [true, false, true]
        );
        assert_eq!(
            ActivityReport::from(shell.activity().snapshot()),
            ActivityReport {
                pending: 0,
                status: "idle".to_string(),
                error_marker: Some("http-error".to_string()),
                error_occurrences: 1,
            }
        );
    }
}
