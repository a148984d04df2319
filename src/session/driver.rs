// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debounce on a tokio task.
//!
//! The latest query text sits in a single-slot `watch` channel, so a burst of
//! keystrokes collapses into whatever was typed last. Each change restarts
//! the quiet interval; when it elapses the query is scored and the outcome is
//! published on a second `watch` channel. Superseded queries are never scored.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::engine::{SearchEngine, SharedEngine};
use crate::types::SearchHit;

/// Outcome of one debounced search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUpdate {
    pub query: String,
    pub hits: Vec<SearchHit>,
    /// User-facing message when the pass failed; `hits` is then empty.
    pub error: Option<&'static str>,
}

impl SearchUpdate {
    fn compute(engine: &SearchEngine, query: &str) -> Self {
        match engine.search(query) {
            Ok(hits) => Self {
                query: query.to_string(),
                hits,
                error: None,
            },
            Err(err) => {
                tracing::warn!(error = %err, "debounced search failed");
                Self {
                    query: query.to_string(),
                    hits: Vec::new(),
                    error: Some(err.user_message()),
                }
            }
        }
    }
}

pub struct DebouncedSearch {
    input: watch::Sender<String>,
    output: watch::Receiver<Option<SearchUpdate>>,
    task: JoinHandle<()>,
}

impl DebouncedSearch {
    /// Start the driver on the current tokio runtime.
    pub fn spawn(engine: SharedEngine, interval: Duration) -> Self {
        let (input, input_rx) = watch::channel(String::new());
        let (output_tx, output) = watch::channel(None);
        let task = tokio::spawn(run(engine, interval, input_rx, output_tx));
        Self {
            input,
            output,
            task,
        }
    }

    /// Replace the query text, restarting the quiet interval.
    pub fn update_query(&self, text: &str) {
        self.input.send_replace(text.to_string());
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<SearchUpdate>> {
        self.output.clone()
    }

    /// Most recently published update.
    pub fn latest(&self) -> Option<SearchUpdate> {
        self.output.borrow().clone()
    }

    /// Stop accepting input and wait for the task. A pending query is dropped.
    pub async fn shutdown(self) {
        drop(self.input);
        if let Err(err) = self.task.await {
            tracing::warn!(error = %err, "debounce task ended abnormally");
        }
    }
}

async fn run(
    engine: SharedEngine,
    interval: Duration,
    mut input: watch::Receiver<String>,
    output: watch::Sender<Option<SearchUpdate>>,
) {
    while input.changed().await.is_ok() {
        loop {
            tokio::select! {
                changed = input.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
                _ = tokio::time::sleep(interval) => break,
            }
        }

        let query = input.borrow_and_update().clone();
        let update = SearchUpdate::compute(&engine.read(), &query);
        tracing::debug!(query = %update.query, hits = update.hits.len(), "debounced search published");
        output.send_replace(Some(update));
    }
}
