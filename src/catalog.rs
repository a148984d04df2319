// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog snapshots.
//!
//! The catalog arrives as a batch of loosely-typed records (every field may be
//! missing). Conversion to [`GuideEntry`] patches missing required text with
//! empty strings and keeps a diagnostic for each patch, so one bad record
//! never takes the rest of the catalog down with it.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{Result, SearchError};
use crate::types::GuideEntry;

/// A catalog record as it appears on the wire.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawGuide {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub topics: Option<Vec<String>>,
    pub stars: Option<u64>,
    pub slug: Option<String>,
}

/// Accepted top-level layouts: a bare array, or `{ "guides": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<RawGuide>),
    Wrapped { guides: Vec<RawGuide> },
}

impl RawGuide {
    /// Convert, recording a `MalformedEntry` for each missing required field.
    fn into_entry(self, index: usize, diagnostics: &mut Vec<SearchError>) -> GuideEntry {
        let mut required = |value: Option<String>, field: &'static str| {
            value.unwrap_or_else(|| {
                tracing::warn!(index, field, "catalog entry missing required field");
                diagnostics.push(SearchError::MalformedEntry { index, field });
                String::new()
            })
        };

        GuideEntry {
            name: required(self.name, "name"),
            display_name: required(self.display_name, "displayName"),
            description: required(self.description, "description"),
            category: required(self.category, "category"),
            slug: required(self.slug, "slug"),
            language: self.language.filter(|l| !l.is_empty()),
            topics: self.topics.unwrap_or_default(),
            stars: self.stars.unwrap_or(0),
        }
    }
}

/// An immutable catalog snapshot.
///
/// Entries are `Arc`ed so ranked results can hold them without copying.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<Arc<GuideEntry>>,
    diagnostics: Vec<SearchError>,
}

impl Catalog {
    pub fn new(entries: Vec<GuideEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(Arc::new).collect(),
            diagnostics: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<RawGuide>) -> Self {
        let mut diagnostics = Vec::new();
        let entries = records
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Arc::new(raw.into_entry(index, &mut diagnostics)))
            .collect();
        Self {
            entries,
            diagnostics,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records = match serde_json::from_str(json)? {
            CatalogFile::List(records) => records,
            CatalogFile::Wrapped { guides } => guides,
        };
        Ok(Self::from_records(records))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            entries = catalog.len(),
            malformed = catalog.diagnostics.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn entries(&self) -> &[Arc<GuideEntry>] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Arc<GuideEntry>> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Problems patched during loading (all `MalformedEntry`).
    pub fn diagnostics(&self) -> &[SearchError] {
        &self.diagnostics
    }

    /// Freeze into a shareable snapshot.
    pub fn into_snapshot(self) -> Arc<Catalog> {
        Arc::new(self)
    }
}

impl FromIterator<GuideEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = GuideEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
