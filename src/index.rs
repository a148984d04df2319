// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Searchable records and the cheap reject test run before scoring.
//!
//! # Invariants
//!
//! 1. **RECORD_PER_ENTRY**: `records[i].entry_idx == i` for every catalog entry.
//! 2. **PREFILTER_SOUND**: `prefilter` never rejects a record whose entry the
//!    scorer would accept for the same term. Every tier the scorer runs
//!    leaves a trace the prefilter checks for: contained and subsequence
//!    matches make the term a subsequence of `text`, edit-distance matches
//!    sit on a token, acronyms spell chars in order.
//! 3. **CACHE_BY_IDENTITY**: the cache rebuilds only when handed a different
//!    catalog snapshot (`Arc::ptr_eq`), never on content comparison.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::catalog::Catalog;
use crate::fuzzy::{edit_budget, levenshtein_within, MIN_EDIT_QUERY_LEN, MIN_EDIT_WORD_LEN};
use crate::types::{Field, GuideEntry};
use crate::util::normalize::{fold_string, is_subsequence, tokenize};

/// Terms this short pass the prefilter unconditionally.
pub const PREFILTER_MIN_TERM_LEN: usize = 4;

/// Folded text and tokens for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableRecord {
    /// Position of the originating entry in its catalog.
    pub entry_idx: usize,
    /// Every field, folded, joined with single spaces.
    pub text: String,
    /// Distinct words of `text` with at least two chars.
    pub tokens: Vec<String>,
}

impl SearchableRecord {
    pub fn from_entry(entry_idx: usize, entry: &GuideEntry) -> Self {
        let joined = Field::ALL
            .iter()
            .map(|&field| entry.field(field))
            .collect::<Vec<_>>()
            .join(" ");
        let text = fold_string(&joined);
        let mut tokens = tokenize(&text);
        tokens.sort_unstable();
        tokens.dedup();
        Self {
            entry_idx,
            text,
            tokens,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<SearchableRecord>,
}

impl SearchIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let entries = catalog.entries();

        #[cfg(feature = "parallel")]
        let records = entries
            .par_iter()
            .enumerate()
            .map(|(idx, entry)| SearchableRecord::from_entry(idx, entry))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let records = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| SearchableRecord::from_entry(idx, entry))
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[SearchableRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total tokens across all records.
    pub fn token_count(&self) -> usize {
        self.records.iter().map(|r| r.tokens.len()).sum()
    }
}

/// Cheap reject test for one normalized term.
///
/// True when the term is too short to judge, when a token contains or is
/// contained in it, when a token is within the edit budget, or when the
/// term's chars occur in order somewhere in the record.
///
/// Deliberately wider than a token containment check alone. Containment
/// would reject typos ("prometeus") and scattered subsequences ("grfna")
/// that the scorer accepts, so the edit-budget and subsequence clauses keep
/// the filter from ever dropping an entry that would have scored.
pub fn prefilter(record: &SearchableRecord, term: &str) -> bool {
    let term_len = term.chars().count();
    if term_len < PREFILTER_MIN_TERM_LEN {
        return true;
    }

    let token_hit = record.tokens.iter().any(|token| {
        if token.contains(term) || term.contains(token.as_str()) {
            return true;
        }
        let token_len = token.chars().count();
        term_len >= MIN_EDIT_QUERY_LEN
            && token_len >= MIN_EDIT_WORD_LEN
            && levenshtein_within(term, token, edit_budget(term_len, token_len))
    });

    token_hit || is_subsequence(term, &record.text)
}

/// Does any of `terms` pass [`prefilter`]?
pub fn prefilter_terms<'a>(record: &SearchableRecord, terms: impl IntoIterator<Item = &'a str>) -> bool {
    terms.into_iter().any(|term| prefilter(record, term))
}

/// Index rebuilt lazily, once per catalog snapshot.
#[derive(Debug, Default)]
pub struct IndexCache {
    catalog: Option<Arc<Catalog>>,
    index: Arc<SearchIndex>,
}

impl IndexCache {
    /// Make sure the index matches `catalog`. Returns true if it was rebuilt.
    pub fn refresh(&mut self, catalog: &Arc<Catalog>) -> bool {
        if self
            .catalog
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, catalog))
        {
            return false;
        }
        self.index = Arc::new(SearchIndex::build(catalog));
        self.catalog = Some(Arc::clone(catalog));
        tracing::debug!(records = self.index.len(), "search index rebuilt");
        true
    }

    pub fn index(&self) -> Arc<SearchIndex> {
        Arc::clone(&self.index)
    }
}
