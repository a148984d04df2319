// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a guide search.
//!
//! Catalog records come in from outside and are never mutated. Everything
//! else here is derived per query and thrown away afterwards.
//!
//! # Invariants
//!
//! - **MatchSpan**: `start < end ≤ field.chars().count()`. Offsets are char
//!   offsets into the original (unfolded) field value.
//! - **ScoredResult**: `spans` are sorted by `start` and never overlap.
//! - **SessionState** `selected_index ∈ [-1, results.len() - 1]` (lives in
//!   `session::state`).

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

// =============================================================================
// CATALOG TYPES
// =============================================================================

/// One installation guide in the catalog.
///
/// Owned by the external catalog. `language` and `topics` are genuinely
/// optional; absence reads as an empty string / empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideEntry {
    /// Canonical identifier, e.g. `nginx`.
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Popularity signal.
    #[serde(default)]
    pub stars: u64,
    /// Routing key, unique within `category`.
    pub slug: String,
}

impl GuideEntry {
    /// The text of one searchable field. Topics are joined with spaces.
    pub fn field(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Name => Cow::Borrowed(&self.name),
            Field::DisplayName => Cow::Borrowed(&self.display_name),
            Field::Description => Cow::Borrowed(&self.description),
            Field::Category => Cow::Borrowed(&self.category),
            Field::Language => Cow::Borrowed(self.language.as_deref().unwrap_or("")),
            Field::Topics => Cow::Owned(self.topics.join(" ")),
        }
    }

    /// Where a confirmed selection should navigate.
    pub fn route(&self) -> RouteKey {
        RouteKey {
            category: self.category.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// Routing key handed to the consumer when a result is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteKey {
    pub category: String,
    pub slug: String,
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.category, self.slug)
    }
}

/// Queryable fields, in the order the scorer visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    DisplayName,
    Category,
    Topics,
    Description,
    Language,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::DisplayName,
        Field::Category,
        Field::Topics,
        Field::Description,
        Field::Language,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::DisplayName => "displayName",
            Field::Category => "category",
            Field::Topics => "topics",
            Field::Description => "description",
            Field::Language => "language",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// MATCH TYPES
// =============================================================================

/// Which matching strategy produced a span.
///
/// Declared strongest first: the derived `Ord` puts `Exact` before
/// `EditDistance`, which is the order the matcher tries them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchTier {
    /// Whole word or whole phrase, delimited by boundaries on both sides.
    Exact,
    /// Starts at a word boundary (prefix of a word).
    WordBoundary,
    /// Contained verbatim, starting mid-word.
    Substring,
    /// Every query char found in order, with gaps.
    FuzzyCharacter,
    /// A word within the Levenshtein budget.
    EditDistance,
    /// Initial letters of consecutive words.
    Acronym,
    /// Matched through a thesaurus alias rather than the typed query.
    ExpandedTerm,
}

impl MatchTier {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::WordBoundary => "word-boundary",
            MatchTier::Substring => "substring",
            MatchTier::FuzzyCharacter => "fuzzy-character",
            MatchTier::EditDistance => "edit-distance",
            MatchTier::Acronym => "acronym",
            MatchTier::ExpandedTerm => "expanded-term",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open char range `[start, end)` within an original field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub tier: MatchTier,
}

impl MatchSpan {
    /// Build a span, checking it against the field's char length.
    pub fn new(start: usize, end: usize, tier: MatchTier, field_len: usize) -> Result<Self> {
        let span = MatchSpan { start, end, tier };
        span.check(field_len)?;
        Ok(span)
    }

    /// Verify `start < end ≤ field_len`.
    pub fn check(&self, field_len: usize) -> Result<()> {
        if self.start < self.end && self.end <= field_len {
            Ok(())
        } else {
            Err(SearchError::InvalidSpan {
                start: self.start,
                end: self.end,
                len: field_len,
            })
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Same range, different tier.
    pub fn with_tier(self, tier: MatchTier) -> Self {
        MatchSpan { tier, ..self }
    }
}

/// One ranked catalog entry for one query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub entry: Arc<GuideEntry>,
    pub score: f64,
    pub matched_field: Field,
    pub spans: Vec<MatchSpan>,
}

/// What the query API hands to a renderer: the entry plus marked-up text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub entry: Arc<GuideEntry>,
    pub score: f64,
    pub highlighted_name: String,
    pub highlighted_description: String,
}
