// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant search over a catalog of installation guides.
//!
//! Type "ngin", "nginix" or "k8s" and get the right guide back. The catalog is
//! small (hundreds to low thousands of entries) and lives in memory, so every
//! query is matched against every entry that survives a cheap prefilter, and
//! nothing is persisted.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌────────────────┐   ┌─────────────┐
//! │ catalog.rs │──▶│   index.rs   │──▶│   engine.rs    │──▶│ session/    │
//! │ (snapshot, │   │ (records,    │   │ (prefilter,    │   │ (debounce,  │
//! │ diagnostics│   │  prefilter)  │   │  rank, hilite) │   │  keys, stats│
//! └────────────┘   └──────────────┘   └────────────────┘   └─────────────┘
//!                                             │
//!                        ┌────────────────────┼───────────────┐
//!                        ▼                    ▼               ▼
//!                 ┌─────────────┐     ┌──────────────┐  ┌──────────────┐
//!                 │ thesaurus.rs│     │  scoring/    │  │ highlight.rs │
//!                 │ (aliases)   │     │ (relevance,  │  │ (markers)    │
//!                 └─────────────┘     │  ranking)    │  └──────────────┘
//!                                     └──────┬───────┘
//!                                            ▼
//!                                     ┌──────────────┐
//!                                     │   fuzzy/     │
//!                                     │ (tier chain) │
//!                                     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use guidefind::{Catalog, GuideEntry, SearchConfig, SearchEngine};
//!
//! let nginx = GuideEntry {
//!     name: "nginx".into(),
//!     display_name: "NGINX".into(),
//!     description: "Web server and reverse proxy".into(),
//!     category: "web-server".into(),
//!     language: None,
//!     topics: vec!["proxy".into()],
//!     stars: 21_000,
//!     slug: "nginx".into(),
//! };
//! let engine = SearchEngine::new(SearchConfig::default())?
//!     .with_catalog(Catalog::new(vec![nginx]).into_snapshot());
//!
//! let hits = engine.search("ngin")?;
//! assert_eq!(hits[0].highlighted_name, "<mark>NGIN</mark>X");
//! # Ok::<(), guidefind::SearchError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default): score entries on the rayon pool.
//! - `unicode-normalization` (default): strip diacritics so "cafe" finds "Café".
//! - `async` (default): [`DebouncedSearch`], a tokio debounce driver.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod index;
pub mod scoring;
pub mod session;
pub mod thesaurus;
pub mod types;
pub mod util;

#[doc(hidden)]
pub mod testing;

pub use catalog::{Catalog, RawGuide};
pub use config::{ConfigError, SearchConfig};
pub use engine::{SearchEngine, SearchOptions, SharedEngine};
pub use error::{Result, SearchError};
pub use fuzzy::{levenshtein, levenshtein_within, FieldMatch, FuzzyMatcher};
pub use highlight::{merge_spans, Highlighter};
pub use index::{prefilter, IndexCache, SearchIndex, SearchableRecord};
pub use scoring::{PreparedQuery, RelevanceScorer};
pub use session::{
    NavKey, NoopAnalytics, Phase, RingBufferAnalytics, SearchAnalytics, SearchSession,
    SearchStats, SessionState,
};
#[cfg(feature = "async")]
pub use session::{DebouncedSearch, SearchUpdate};
pub use thesaurus::AliasTable;
pub use types::{Field, GuideEntry, MatchSpan, MatchTier, RouteKey, ScoredResult, SearchHit};
pub use util::normalize::normalize;
