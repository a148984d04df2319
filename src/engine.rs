// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query API: catalog in, ranked and highlighted hits out.
//!
//! One scoring pass is prefilter → score → sort → truncate → highlight. It
//! runs to completion once started. Per-entry failures are logged and the
//! entry is skipped; only a missing catalog fails the pass.

use std::sync::Arc;

use parking_lot::RwLock;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::highlight::Highlighter;
use crate::index::{prefilter_terms, IndexCache, SearchIndex, SearchableRecord};
use crate::scoring::ranking::rank;
use crate::scoring::{PreparedQuery, RelevanceScorer};
use crate::thesaurus::AliasTable;
use crate::types::{Field, ScoredResult, SearchHit};
use crate::util::normalize::{fold, normalize, word_ranges};

/// An engine shared between a session and whoever swaps catalogs.
pub type SharedEngine = Arc<RwLock<SearchEngine>>;

/// Per-call overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Results to keep; `None` uses the configured maximum.
    pub limit: Option<usize>,
    /// Only entries in this category (case-insensitive).
    pub category: Option<String>,
}

#[derive(Debug)]
pub struct SearchEngine {
    config: SearchConfig,
    scorer: RelevanceScorer,
    highlighter: Highlighter,
    catalog: Option<Arc<Catalog>>,
    cache: IndexCache,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let thesaurus = AliasTable::builtin()
            .clone()
            .extended(&config.extra_aliases);
        Ok(Self {
            scorer: RelevanceScorer::new(&config, thesaurus),
            highlighter: Highlighter::from_config(&config),
            config,
            catalog: None,
            cache: IndexCache::default(),
        })
    }

    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.set_catalog(catalog);
        self
    }

    /// Swap in a new snapshot. The index is rebuilt only if the snapshot changed.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.cache.refresh(&catalog);
        self.catalog = Some(catalog);
    }

    pub fn into_shared(self) -> SharedEngine {
        Arc::new(RwLock::new(self))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn catalog(&self) -> Option<&Arc<Catalog>> {
        self.catalog.as_ref()
    }

    pub fn index(&self) -> Arc<SearchIndex> {
        self.cache.index()
    }

    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    pub fn prepare(&self, raw: &str) -> PreparedQuery {
        self.scorer.prepare(raw)
    }

    /// Is this query long enough to be scored at all?
    pub fn accepts(&self, query: &PreparedQuery) -> bool {
        query.len() >= self.config.min_query_len
    }

    /// Score the catalog, sort, truncate.
    pub fn rank(&self, query: &PreparedQuery, options: &SearchOptions) -> Result<Vec<ScoredResult>> {
        if !self.accepts(query) {
            return Ok(Vec::new());
        }
        let catalog = self.catalog.as_ref().ok_or(SearchError::CatalogUnavailable)?;

        let index = self.cache.index();
        let category = options.category.as_deref().map(normalize);
        let score_one = |record: &SearchableRecord| -> Option<ScoredResult> {
            let entry = catalog.get(record.entry_idx)?;
            if category
                .as_ref()
                .is_some_and(|wanted| normalize(&entry.category) != *wanted)
            {
                return None;
            }
            if !prefilter_terms(record, query.expanded.iter().map(String::as_str)) {
                return None;
            }
            match self.scorer.score_prepared(entry, query) {
                Ok(result) => result,
                Err(err) => {
                    let err = SearchError::ScoringFailure {
                        name: entry.name.clone(),
                        reason: err.to_string(),
                    };
                    tracing::warn!(error = %err, "skipping entry");
                    None
                }
            }
        };

        #[cfg(feature = "parallel")]
        let mut results: Vec<ScoredResult> = index.records().par_iter().filter_map(score_one).collect();

        #[cfg(not(feature = "parallel"))]
        let mut results: Vec<ScoredResult> = index.records().iter().filter_map(score_one).collect();

        let matched = results.len();
        rank(&mut results, options.limit.unwrap_or(self.config.max_results));
        tracing::debug!(
            query = %query.normalized,
            candidates = index.len(),
            matched,
            kept = results.len(),
            "scoring pass complete"
        );
        Ok(results)
    }

    pub fn search(&self, text: &str) -> Result<Vec<SearchHit>> {
        self.search_with(text, &SearchOptions::default())
    }

    pub fn search_with(&self, text: &str, options: &SearchOptions) -> Result<Vec<SearchHit>> {
        let query = self.prepare(text);
        let results = self.rank(&query, options)?;
        Ok(self.highlight_all(&query, &results))
    }

    pub fn highlight_all(&self, query: &PreparedQuery, results: &[ScoredResult]) -> Vec<SearchHit> {
        results.iter().map(|r| self.highlight(query, r)).collect()
    }

    /// Recompute spans for the two displayed fields and render them.
    pub fn highlight(&self, query: &PreparedQuery, result: &ScoredResult) -> SearchHit {
        let entry = &result.entry;
        let spans_for = |field: Field, text: &str| {
            let spans = self.scorer.spans_for(query, text);
            if spans.is_empty() && result.matched_field == field {
                result.spans.clone()
            } else {
                spans
            }
        };
        let name_spans = spans_for(Field::DisplayName, &entry.display_name);
        let description_spans = spans_for(Field::Description, &entry.description);

        SearchHit {
            entry: Arc::clone(entry),
            score: result.score,
            highlighted_name: self.highlighter.render(&entry.display_name, &name_spans),
            highlighted_description: self
                .highlighter
                .render(&entry.description, &description_spans),
        }
    }

    /// Display names with a word starting with `prefix`, most popular first.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<String>> {
        let catalog = self.catalog.as_ref().ok_or(SearchError::CatalogUnavailable)?;
        let prefix: Vec<char> = normalize(prefix).chars().collect();
        if prefix.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<_> = catalog
            .entries()
            .iter()
            .filter(|entry| {
                let folded = fold(&entry.display_name);
                folded.starts_with(&prefix)
                    || word_ranges(&folded)
                        .into_iter()
                        .any(|(start, _)| folded[start..].starts_with(&prefix))
            })
            .collect();
        hits.sort_by(|a, b| {
            b.stars
                .cmp(&a.stars)
                .then_with(|| a.display_name.cmp(&b.display_name))
        });

        let mut names: Vec<String> = Vec::with_capacity(limit);
        for entry in hits {
            if names.len() == limit {
                break;
            }
            if !names.contains(&entry.display_name) {
                names.push(entry.display_name.clone());
            }
        }
        Ok(names)
    }
}
