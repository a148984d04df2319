// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Session state as a plain value, and the four keyboard transitions.
//!
//! ```text
//!            input               quiet interval           ok
//!   Idle ───────────▶ Debouncing ──────────────▶ Scoring ─────▶ Presenting
//!    ▲                  │    ▲ input                 │ err
//!    │                  └────┘                       ▼
//!    └──────────────── dismiss (any phase) ◀──────  Error
//! ```
//!
//! Navigation keys are only honoured while `Presenting`.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::{RouteKey, ScoredResult, SearchHit};

/// No row selected.
pub const NO_SELECTION: isize = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    #[default]
    Idle,
    Debouncing,
    Scoring,
    Presenting,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    Confirm,
    Dismiss,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub query_text: String,
    pub normalized_query: String,
    pub expanded_terms: BTreeSet<String>,
    pub results: Vec<ScoredResult>,
    /// Highlighted form of `results`, same order.
    pub hits: Vec<SearchHit>,
    /// In `[-1, results.len() - 1]`.
    pub selected_index: isize,
    pub phase: Phase,
    /// User-facing message while in `Error`.
    pub error: Option<&'static str>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            query_text: String::new(),
            normalized_query: String::new(),
            expanded_terms: BTreeSet::new(),
            results: Vec::new(),
            hits: Vec::new(),
            selected_index: NO_SELECTION,
            phase: Phase::Idle,
            error: None,
        }
    }
}

impl SessionState {
    pub fn selected(&self) -> Option<&ScoredResult> {
        usize::try_from(self.selected_index)
            .ok()
            .and_then(|i| self.results.get(i))
    }

    /// Replace the result list and present it with nothing selected.
    pub fn present(mut self, results: Vec<ScoredResult>, hits: Vec<SearchHit>) -> Self {
        self.results = results;
        self.hits = hits;
        self.selected_index = NO_SELECTION;
        self.phase = Phase::Presenting;
        self.error = None;
        self
    }

    /// Drop any results and show `message`.
    pub fn fail(mut self, message: &'static str) -> Self {
        self.results.clear();
        self.hits.clear();
        self.selected_index = NO_SELECTION;
        self.phase = Phase::Error;
        self.error = Some(message);
        self
    }

    /// Apply one key. Confirm yields the selected entry's route, if any.
    pub fn apply(mut self, key: NavKey) -> (SessionState, Option<RouteKey>) {
        if key == NavKey::Dismiss {
            return (SessionState::default(), None);
        }
        if self.phase != Phase::Presenting {
            return (self, None);
        }

        let last = self.results.len() as isize - 1;
        match key {
            NavKey::Next => self.selected_index = (self.selected_index + 1).min(last),
            NavKey::Previous => self.selected_index = (self.selected_index - 1).max(NO_SELECTION),
            NavKey::Confirm => {
                let route = self.selected().map(|r| r.entry.route());
                return (self, route);
            }
            NavKey::Dismiss => {}
        }
        (self, None)
    }
}
