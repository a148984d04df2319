// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for matching, ranking and the interactive session.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to override:
//!
//! ```json
//! { "maxResults": 12, "debounceMs": 150, "extraAliases": { "tf": ["terraform"] } }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{Result, SearchError};

/// Queries shorter than this (in chars, after normalization) never score.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Results kept after ranking.
pub const DEFAULT_MAX_RESULTS: usize = 8;

/// Quiet interval before a scoring pass runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Entries scoring below this are dropped.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.15;

/// Window used by the fuzzy-character distance penalty.
pub const DEFAULT_FUZZY_MAX_DISTANCE: usize = 40;

/// Alias matches count for this fraction of a direct match.
pub const DEFAULT_EXPANSION_DISCOUNT: f64 = 0.8;

/// Recent searches retained for statistics.
pub const DEFAULT_ANALYTICS_CAPACITY: usize = 100;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("maxResults must be at least 1")]
    ZeroMaxResults,
    #[error("minQueryLen must be at least 1")]
    ZeroMinQueryLen,
    #[error("scoreThreshold {0} must be within [0, 10)")]
    ThresholdOutOfRange(f64),
    #[error("expansionDiscount {0} must be within (0, 1]")]
    DiscountOutOfRange(f64),
    #[error("fuzzyMaxDistance must be at least 1")]
    ZeroFuzzyDistance,
    #[error("analyticsCapacity must be at least 1")]
    ZeroAnalyticsCapacity,
    #[error("highlight markers must not be empty")]
    EmptyHighlightMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub min_query_len: usize,
    pub max_results: usize,
    pub debounce_ms: u64,
    pub score_threshold: f64,
    pub fuzzy_max_distance: usize,
    pub expansion_discount: f64,
    pub analytics_capacity: usize,
    pub highlight_open: String,
    pub highlight_close: String,
    /// Added on top of the built-in thesaurus.
    pub extra_aliases: BTreeMap<String, Vec<String>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            max_results: DEFAULT_MAX_RESULTS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            fuzzy_max_distance: DEFAULT_FUZZY_MAX_DISTANCE,
            expansion_discount: DEFAULT_EXPANSION_DISCOUNT,
            analytics_capacity: DEFAULT_ANALYTICS_CAPACITY,
            highlight_open: "<mark>".to_string(),
            highlight_close: "</mark>".to_string(),
            extra_aliases: BTreeMap::new(),
        }
    }
}

impl SearchConfig {
    /// Load overrides from a JSON file and validate them.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 {
            return Err(ConfigError::ZeroMaxResults);
        }
        if self.min_query_len == 0 {
            return Err(ConfigError::ZeroMinQueryLen);
        }
        if !(0.0..10.0).contains(&self.score_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.score_threshold));
        }
        if !(self.expansion_discount > 0.0 && self.expansion_discount <= 1.0) {
            return Err(ConfigError::DiscountOutOfRange(self.expansion_discount));
        }
        if self.fuzzy_max_distance == 0 {
            return Err(ConfigError::ZeroFuzzyDistance);
        }
        if self.analytics_capacity == 0 {
            return Err(ConfigError::ZeroAnalyticsCapacity);
        }
        if self.highlight_open.is_empty() || self.highlight_close.is_empty() {
            return Err(ConfigError::EmptyHighlightMarker);
        }
        Ok(())
    }

    pub fn debounce_interval(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
