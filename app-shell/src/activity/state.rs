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

//! Aggregate activity state and its transitions.

use std::fmt::{Display, Formatter};

/// Marker raised on the error register when a coordinated call fails.
pub const HTTP_ERROR_MARKER: &str = "http-error";

/// Global loading indicator state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ActivityStatus {
    #[default]
    Idle,
    Loading,
}

impl Display for ActivityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityStatus::Idle => f.write_str("idle"),
            ActivityStatus::Loading => f.write_str("loading"),
        }
    }
}

/// Error-register entry read by the error banner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ErrorSignal {
    pub marker: &'static str,
    /// Failures observed since the register was last cleared.
    pub occurrences: u64,
}

/// Immutable view of the coordinator state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ActivitySnapshot {
    pub pending: usize,
    pub status: ActivityStatus,
    pub error: Option<ErrorSignal>,
}

impl ActivitySnapshot {
    pub fn is_loading(&self) -> bool {
        self.status == ActivityStatus::Loading
    }

    pub fn error_signaled(&self) -> bool {
        self.error.is_some()
    }

    /// Only a 0 to 1 start turns the indicator on; after a failure it stays
    /// idle until the remaining calls drain.
    pub(crate) fn on_call_started(&mut self) {
        let was_idle_and_empty = self.pending == 0 && self.status == ActivityStatus::Idle;
        self.pending += 1;
        if was_idle_and_empty {
            self.status = ActivityStatus::Loading;
        }
    }

    /// Returns `false` when there was no call to settle.
    pub(crate) fn on_call_succeeded(&mut self) -> bool {
        self.settle_quietly()
    }

    /// A call dropped before settling gives its slot back without raising an error.
    pub(crate) fn on_call_abandoned(&mut self) -> bool {
        self.settle_quietly()
    }

    /// Returns `false` when there was no call to settle.
    pub(crate) fn on_call_failed(&mut self) -> bool {
        let balanced = self.release_slot();
        self.status = ActivityStatus::Idle;
        self.raise_error(HTTP_ERROR_MARKER);
        balanced
    }

    pub(crate) fn clear_error(&mut self) -> bool {
        self.error.take().is_some()
    }

    fn raise_error(&mut self, marker: &'static str) {
        let occurrences = match self.error {
            Some(signal) if signal.marker == marker => signal.occurrences + 1,
            _ => 1,
        };
        self.error = Some(ErrorSignal {
            marker,
            occurrences,
        });
    }

    fn settle_quietly(&mut self) -> bool {
        let balanced = self.release_slot();
        if self.pending == 0 && self.status == ActivityStatus::Loading {
            self.status = ActivityStatus::Idle;
        }
        balanced
    }

    fn release_slot(&mut self) -> bool {
        match self.pending.checked_sub(1) {
            Some(pending) => {
                self.pending = pending;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ActivitySnapshot, ActivityStatus, HTTP_ERROR_MARKER};

    #[test]
    fn single_successful_call_round_trips_to_idle() {
        let mut state = ActivitySnapshot::default();

        state.on_call_started();
        assert_eq!(state.pending, 1);
        assert_eq!(state.status, ActivityStatus::Loading);

        assert!(state.on_call_succeeded());
        assert_eq!(state, ActivitySnapshot::default());
    }

    #[test]
    fn success_before_failure_ends_idle_with_error() {
        let mut state = ActivitySnapshot::default();
        state.on_call_started();
        state.on_call_started();

        state.on_call_succeeded();
        assert_eq!(state.pending, 1);
        assert_eq!(state.status, ActivityStatus::Loading);

        state.on_call_failed();
        assert_eq!(state.pending, 0);
        assert_eq!(state.status, ActivityStatus::Idle);
        assert_eq!(state.error.map(|signal| signal.marker), Some(HTTP_ERROR_MARKER));
    }

    #[test]
    fn failure_clears_loading_while_other_calls_pend() {
        let mut state = ActivitySnapshot::default();
        state.on_call_started();
        state.on_call_started();

        state.on_call_failed();
        assert_eq!(state.pending, 1);
        assert_eq!(state.status, ActivityStatus::Idle);
        assert!(state.error_signaled());

        // The remaining call does not bring the indicator back.
        state.on_call_succeeded();
        assert_eq!(state.status, ActivityStatus::Idle);
    }

    #[test]
    fn start_after_failure_with_calls_pending_stays_idle() {
        let mut state = ActivitySnapshot::default();
        state.on_call_started();
        state.on_call_started();
        state.on_call_failed();

        state.on_call_started();
        assert_eq!(state.pending, 2);
        assert_eq!(state.status, ActivityStatus::Idle);

        state.on_call_succeeded();
        state.on_call_succeeded();
        assert_eq!(state.pending, 0);

        state.on_call_started();
        assert_eq!(state.status, ActivityStatus::Loading);
    }

    #[test]
    fn new_call_does_not_clear_error_register() {
        let mut state = ActivitySnapshot::default();
        state.on_call_started();
        state.on_call_failed();

        state.on_call_started();
        assert_eq!(state.status, ActivityStatus::Loading);
        assert!(state.error_signaled());

        state.on_call_failed();
        assert_eq!(state.error.map(|signal| signal.occurrences), Some(2));
        assert!(state.clear_error());
        assert!(!state.clear_error());
    }

    #[test]
    fn unmatched_settle_is_clamped_at_zero() {
        let mut state = ActivitySnapshot::default();

        assert!(!state.on_call_succeeded());
        assert!(!state.on_call_failed());
        assert_eq!(state.pending, 0);
    }
}
