// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One interactive search box.
//!
//! A [`SearchSession`] owns its [`SessionState`] outright; nothing else
//! mutates it. Time comes in through `input`/`poll` so the whole lifecycle
//! can be driven deterministically. The async [`DebouncedSearch`] driver
//! wraps the same engine behind tokio channels for callers that want the
//! timer handled for them.

mod analytics;
mod debounce;
#[cfg(feature = "async")]
mod driver;
mod state;

use std::sync::Arc;
use std::time::Instant;

pub use analytics::*;
pub use debounce::Debouncer;
#[cfg(feature = "async")]
pub use driver::{DebouncedSearch, SearchUpdate};
pub use state::*;

use crate::engine::{SearchOptions, SharedEngine};
use crate::types::RouteKey;

type SelectCallback = Box<dyn FnMut(&RouteKey) + Send>;

pub struct SearchSession {
    engine: SharedEngine,
    state: SessionState,
    debouncer: Debouncer,
    analytics: Arc<dyn SearchAnalytics>,
    last_event: Option<u64>,
    on_select: Option<SelectCallback>,
}

impl SearchSession {
    pub fn new(engine: SharedEngine) -> Self {
        let (interval, capacity) = {
            let engine = engine.read();
            (
                engine.config().debounce_interval(),
                engine.config().analytics_capacity,
            )
        };
        Self {
            engine,
            state: SessionState::default(),
            debouncer: Debouncer::new(interval),
            analytics: Arc::new(RingBufferAnalytics::new(capacity)),
            last_event: None,
            on_select: None,
        }
    }

    pub fn with_analytics(mut self, analytics: Arc<dyn SearchAnalytics>) -> Self {
        self.analytics = analytics;
        self
    }

    /// Called with the route of every confirmed selection.
    pub fn on_select(mut self, callback: impl FnMut(&RouteKey) + Send + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn analytics(&self) -> &Arc<dyn SearchAnalytics> {
        &self.analytics
    }

    /// When the pending scoring run is due, if one is pending.
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// The query text changed.
    ///
    /// Empty text resets to `Idle`. Text below the minimum length presents an
    /// empty list without scoring (still recorded as a search with no results).
    /// Anything else (re)starts the quiet interval.
    pub fn input(&mut self, text: &str, now: Instant) {
        let (query, accepted) = {
            let engine = self.engine.read();
            let query = engine.prepare(text);
            let accepted = engine.accepts(&query);
            (query, accepted)
        };

        if query.is_empty() {
            self.debouncer.cancel();
            self.state = SessionState::default();
            self.state.query_text = text.to_string();
            return;
        }

        let mut state = std::mem::take(&mut self.state);
        state.query_text = text.to_string();
        state.normalized_query = query.normalized;
        state.expanded_terms = query.expanded;

        if accepted {
            self.debouncer.schedule(text, now);
            state.phase = Phase::Debouncing;
            self.state = state;
        } else {
            self.debouncer.cancel();
            self.last_event = Some(self.analytics.record(&state.normalized_query, 0));
            self.state = state.present(Vec::new(), Vec::new());
        }
        tracing::trace!(phase = ?self.state.phase, "session input");
    }

    /// Run the pending search if its quiet interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.take_due(now) {
            Some(query) => {
                self.run(&query);
                true
            }
            None => false,
        }
    }

    /// Run the pending search immediately.
    pub fn flush(&mut self) -> bool {
        match self.debouncer.take_now() {
            Some(query) => {
                self.run(&query);
                true
            }
            None => false,
        }
    }

    /// Re-run the current query after an error.
    pub fn retry(&mut self) -> bool {
        if self.state.phase != Phase::Error {
            return false;
        }
        let query = self.state.query_text.clone();
        self.run(&query);
        true
    }

    /// Apply a navigation key. Confirm fires the callback and returns the route.
    pub fn navigate(&mut self, key: NavKey) -> Option<RouteKey> {
        let selected = self.state.selected().map(|r| r.entry.name.clone());
        let (state, route) = std::mem::take(&mut self.state).apply(key);
        self.state = state;

        if key == NavKey::Dismiss {
            self.debouncer.cancel();
            self.last_event = None;
        }

        let route = route?;
        if let (Some(id), Some(name)) = (self.last_event, selected) {
            self.analytics.mark_selected(id, &name);
        }
        if let Some(callback) = self.on_select.as_mut() {
            callback(&route);
        }
        tracing::debug!(route = %route, "selection confirmed");
        Some(route)
    }

    pub fn stats(&self) -> SearchStats {
        self.analytics.stats()
    }

    fn run(&mut self, text: &str) {
        self.state.phase = Phase::Scoring;
        let outcome = {
            let engine = self.engine.read();
            let query = engine.prepare(text);
            engine
                .rank(&query, &SearchOptions::default())
                .map(|results| {
                    let hits = engine.highlight_all(&query, &results);
                    (query, results, hits)
                })
        };

        let state = std::mem::take(&mut self.state);
        match outcome {
            Ok((query, results, hits)) => {
                self.last_event = Some(self.analytics.record(&query.normalized, results.len()));
                tracing::debug!(query = %query.normalized, results = results.len(), "presenting");
                self.state = state.present(results, hits);
            }
            Err(err) => {
                tracing::warn!(error = %err, "search failed");
                self.last_event = None;
                self.state = state.fail(err.user_message());
            }
        }
    }
}
