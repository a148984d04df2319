// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Nothing in here is fatal to the host. A malformed catalog entry is patched
//! and reported, a per-entry scoring failure drops that entry, and only a
//! missing catalog fails a whole pass (the session turns that into its
//! `Error` phase). Short queries are not errors at all.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T, E = SearchError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// A catalog record lacked a required text field; an empty string was used.
    #[error("catalog entry {index} is missing required field `{field}`")]
    MalformedEntry { index: usize, field: &'static str },

    /// Scoring one entry failed; the entry was skipped.
    #[error("scoring failed for `{name}`: {reason}")]
    ScoringFailure { name: String, reason: String },

    /// No catalog snapshot has been loaded.
    #[error("no catalog is loaded")]
    CatalogUnavailable,

    #[error("span {start}..{end} is out of bounds for a field of {len} chars")]
    InvalidSpan { start: usize, end: usize, len: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    /// Message safe to show next to a search box.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::CatalogUnavailable => {
                "Guides are not available right now. Try again in a moment."
            }
            _ => "Search failed. Try again or clear the query.",
        }
    }
}
