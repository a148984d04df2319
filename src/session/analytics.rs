// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lightweight usage analytics: what was searched, did it find anything,
//! did anyone click.

use std::collections::VecDeque;

use parking_lot::Mutex;
use serde::Serialize;

use crate::config::DEFAULT_ANALYTICS_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEvent {
    pub id: u64,
    pub query: String,
    pub result_count: usize,
    /// Name of the entry the user confirmed, if any.
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub total: usize,
    pub with_results: usize,
    pub with_selection: usize,
    /// Fraction of searches with at least one result.
    pub success_rate: f64,
    /// Fraction of searches that ended in a selection.
    pub click_rate: f64,
}

impl SearchStats {
    fn from_events<'a>(events: impl IntoIterator<Item = &'a SearchEvent>) -> Self {
        let mut stats = SearchStats::default();
        for event in events {
            stats.total += 1;
            stats.with_results += usize::from(event.result_count > 0);
            stats.with_selection += usize::from(event.selected.is_some());
        }
        if stats.total > 0 {
            stats.success_rate = stats.with_results as f64 / stats.total as f64;
            stats.click_rate = stats.with_selection as f64 / stats.total as f64;
        }
        stats
    }
}

/// Sink for search events. Implementations must be cheap; they run on the
/// session's thread after every scoring pass.
pub trait SearchAnalytics: Send + Sync {
    /// Record a completed search; returns an id for [`Self::mark_selected`].
    fn record(&self, query: &str, result_count: usize) -> u64;

    /// Note that the search `id` ended with `name` being confirmed. Unknown
    /// or evicted ids are ignored.
    fn mark_selected(&self, id: u64, name: &str);

    fn stats(&self) -> SearchStats;
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalytics;

impl SearchAnalytics for NoopAnalytics {
    fn record(&self, _query: &str, _result_count: usize) -> u64 {
        0
    }

    fn mark_selected(&self, _id: u64, _name: &str) {}

    fn stats(&self) -> SearchStats {
        SearchStats::default()
    }
}

#[derive(Debug, Default)]
struct Ring {
    events: VecDeque<SearchEvent>,
    next_id: u64,
}

/// Keeps the most recent `capacity` searches in memory.
#[derive(Debug)]
pub struct RingBufferAnalytics {
    capacity: usize,
    ring: Mutex<Ring>,
}

impl Default for RingBufferAnalytics {
    fn default() -> Self {
        Self::new(DEFAULT_ANALYTICS_CAPACITY)
    }
}

impl RingBufferAnalytics {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            ring: Mutex::new(Ring {
                events: VecDeque::with_capacity(capacity),
                next_id: 0,
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of retained events, oldest first.
    pub fn events(&self) -> Vec<SearchEvent> {
        self.ring.lock().events.iter().cloned().collect()
    }
}

impl SearchAnalytics for RingBufferAnalytics {
    fn record(&self, query: &str, result_count: usize) -> u64 {
        let mut ring = self.ring.lock();
        ring.next_id += 1;
        let id = ring.next_id;
        if ring.events.len() == self.capacity {
            ring.events.pop_front();
        }
        ring.events.push_back(SearchEvent {
            id,
            query: query.to_string(),
            result_count,
            selected: None,
        });
        id
    }

    fn mark_selected(&self, id: u64, name: &str) {
        let mut ring = self.ring.lock();
        if let Some(event) = ring.events.iter_mut().rev().find(|e| e.id == id) {
            event.selected = Some(name.to_string());
        }
    }

    fn stats(&self) -> SearchStats {
        SearchStats::from_events(&self.ring.lock().events)
    }
}
