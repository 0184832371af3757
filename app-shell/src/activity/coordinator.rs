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

//! Request-activity coordinator that folds concurrent calls into one status.

use crate::activity::state::ActivitySnapshot;
use crate::observability::events;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};
use uuid::Uuid;

const COMPONENT: &str = "activity_coordinator";

/// Failure of a call bounded by [`ActivityCoordinator::wrap_with_timeout`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CallError<E> {
    /// The call itself failed; the original error is preserved.
    Failed(E),
    /// The call did not settle within the limit and was dropped.
    TimedOut(Duration),
}

impl<E: Display> Display for CallError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CallError::Failed(err) => write!(f, "call failed: {err}"),
            CallError::TimedOut(limit) => write!(f, "call timed out after {limit:?}"),
        }
    }
}

impl<E: Error + 'static> Error for CallError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CallError::Failed(err) => Some(err),
            CallError::TimedOut(_) => None,
        }
    }
}

///
/// [`ActivityCoordinator`] owns the loading/error state shared by every outbound call.
///
/// Clones share the same state. All mutation goes through [`wrap`](Self::wrap) (and
/// [`clear_error`](Self::clear_error) for the error register); readers get copies
/// through [`snapshot`](Self::snapshot) or follow changes through
/// [`subscribe`](Self::subscribe).
///
/// # Examples
///
/// ```
/// use app_shell::{ActivityCoordinator, ActivityStatus};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let coordinator = ActivityCoordinator::new();
///
/// let value: Result<u32, String> = coordinator.wrap(async { Ok(7) }).await;
/// assert_eq!(value, Ok(7));
///
/// let failed: Result<u32, String> = coordinator
///     .wrap(async { Err("connection reset".to_string()) })
///     .await;
/// assert!(failed.is_err());
///
/// let snapshot = coordinator.snapshot();
/// assert_eq!(snapshot.pending, 0);
/// assert_eq!(snapshot.status, ActivityStatus::Idle);
/// assert!(snapshot.error_signaled());
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct ActivityCoordinator {
    state: Arc<watch::Sender<ActivitySnapshot>>,
}

impl Default for ActivityCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityCoordinator {
    pub fn new() -> Self {
        let (state, _) = watch::channel(ActivitySnapshot::default());
        Self {
            state: Arc::new(state),
        }
    }

    pub fn snapshot(&self) -> ActivitySnapshot {
        *self.state.borrow()
    }

    /// Receiver notified after every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ActivitySnapshot> {
        self.state.subscribe()
    }

    /// Clears the error register. Returns `true` if an error was signaled.
    pub fn clear_error(&self) -> bool {
        let (cleared, _) = self.apply(ActivitySnapshot::clear_error);
        if cleared {
            debug!(
                event = events::ACTIVITY_ERROR_CLEARED,
                component = COMPONENT,
                "error register cleared"
            );
        }
        cleared
    }

    /// Runs `call` as one tracked in-flight operation.
    ///
    /// The result is returned unchanged. A failure resets the loading status and
    /// raises the error register before it reaches the caller. If the returned
    /// future is dropped before `call` settles, the slot is released without
    /// raising an error.
    pub async fn wrap<F, T, E>(&self, call: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        let slot = InFlightSlot::acquire(self);
        let result = call.await;
        match &result {
            Ok(_) => slot.settle(Settlement::Succeeded),
            Err(_) => slot.settle(Settlement::Failed),
        }
        result
    }

    /// Like [`wrap`](Self::wrap), but gives up after `limit`. Expiry counts as a
    /// failure.
    pub async fn wrap_with_timeout<F, T, E>(
        &self,
        limit: Duration,
        call: F,
    ) -> Result<T, CallError<E>>
    where
        F: Future<Output = Result<T, E>>,
    {
        self.wrap(async move {
            match tokio::time::timeout(limit, call).await {
                Ok(result) => result.map_err(CallError::Failed),
                Err(_) => {
                    warn!(
                        event = events::ACTIVITY_CALL_TIMED_OUT,
                        component = COMPONENT,
                        limit_ms = limit.as_millis() as u64,
                        "call timed out"
                    );
                    Err(CallError::TimedOut(limit))
                }
            }
        })
        .await
    }

    fn apply(
        &self,
        transition: impl FnOnce(&mut ActivitySnapshot) -> bool,
    ) -> (bool, ActivitySnapshot) {
        let mut applied = false;
        let mut after = ActivitySnapshot::default();
        self.state.send_modify(|state| {
            applied = transition(state);
            after = *state;
        });
        (applied, after)
    }
}

#[derive(Clone, Copy, Debug)]
enum Settlement {
    Succeeded,
    Failed,
    Abandoned,
}

/// Holds one unit of `pending` until settled or dropped.
struct InFlightSlot<'a> {
    coordinator: &'a ActivityCoordinator,
    call_id: Uuid,
    settled: bool,
}

impl<'a> InFlightSlot<'a> {
    fn acquire(coordinator: &'a ActivityCoordinator) -> Self {
        let call_id = Uuid::new_v4();
        let (_, snapshot) = coordinator.apply(|state| {
            state.on_call_started();
            true
        });
        debug!(
            event = events::ACTIVITY_CALL_START,
            component = COMPONENT,
            call_id = %call_id,
            pending = snapshot.pending,
            status = %snapshot.status,
            "call started"
        );

        Self {
            coordinator,
            call_id,
            settled: false,
        }
    }

    fn settle(mut self, settlement: Settlement) {
        self.release(settlement);
    }

    fn release(&mut self, settlement: Settlement) {
        if self.settled {
            return;
        }
        self.settled = true;

        let (balanced, snapshot) = self.coordinator.apply(|state| match settlement {
            Settlement::Succeeded => state.on_call_succeeded(),
            Settlement::Failed => state.on_call_failed(),
            Settlement::Abandoned => state.on_call_abandoned(),
        });

        if !balanced {
            warn!(
                event = events::ACTIVITY_PENDING_UNDERFLOW,
                component = COMPONENT,
                call_id = %self.call_id,
                "settled a call with no pending slot; count clamped at zero"
            );
        }

        match settlement {
            Settlement::Succeeded => debug!(
                event = events::ACTIVITY_CALL_OK,
                component = COMPONENT,
                call_id = %self.call_id,
                pending = snapshot.pending,
                status = %snapshot.status,
                "call succeeded"
            ),
            Settlement::Failed => warn!(
                event = events::ACTIVITY_CALL_FAILED,
                component = COMPONENT,
                call_id = %self.call_id,
                pending = snapshot.pending,
                marker = snapshot.error.map(|signal| signal.marker),
                "call failed; error register raised"
            ),
            Settlement::Abandoned => debug!(
                event = events::ACTIVITY_CALL_ABANDONED,
                component = COMPONENT,
                call_id = %self.call_id,
                pending = snapshot.pending,
                "call dropped before settling"
            ),
        }
    }
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        self.release(Settlement::Abandoned);
    }
}
