// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-slot debounce timer.
//!
//! At most one scoring run is pending. Scheduling replaces whatever was
//! pending and restarts the quiet interval; nothing is ever queued. Time is
//! passed in by the caller so the state machine stays deterministic.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    token: u64,
    query: String,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    pending: Option<Pending>,
    next_token: u64,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            next_token: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule `query`, superseding any pending run. Returns its token.
    pub fn schedule(&mut self, query: impl Into<String>, now: Instant) -> u64 {
        self.next_token += 1;
        if let Some(old) = &self.pending {
            tracing::trace!(superseded = old.token, "debounce restarted");
        }
        self.pending = Some(Pending {
            token: self.next_token,
            query: query.into(),
            deadline: now + self.interval,
        });
        self.next_token
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Token of the pending run, if any.
    pub fn token(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.token)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Take the pending query once its quiet interval has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        if self.deadline()? > now {
            return None;
        }
        self.pending.take().map(|p| p.query)
    }

    /// Take the pending query regardless of the deadline.
    pub fn take_now(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.query)
    }
}
