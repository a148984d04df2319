// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The tier chain: one query against one field.
//!
//! Tiers run strongest first and the first success wins:
//!
//! | Tier            | Condition                                   | Weight        |
//! |-----------------|---------------------------------------------|---------------|
//! | exact           | contained, word boundary on both sides       | 1.0           |
//! | word-boundary   | contained, starts a word                     | 0.9           |
//! | substring       | contained mid-word                           | 0.75          |
//! | fuzzy-character | in-order subsequence, query ≥ 3 chars         | ≤ 0.7         |
//! | edit-distance   | a word within `floor(0.3 * max len)` edits    | ≤ 0.6         |
//!
//! The weights are ordered so a weaker tier can never outscore a stronger one
//! on the same field. Everything here is a pure function of its inputs; scoring
//! many entries in parallel needs no coordination.

use super::edit::{
    distance_chars, edit_budget, within_chars, MIN_EDIT_QUERY_LEN, MIN_EDIT_WORD_LEN,
};
use super::subsequence::subsequence_match;
use crate::config::DEFAULT_FUZZY_MAX_DISTANCE;
use crate::types::{MatchSpan, MatchTier};
use crate::util::normalize::{fold, is_boundary_at, is_word_separator, word_ranges};

/// Contribution of a whole-word (or whole-phrase) hit.
pub const EXACT_WEIGHT: f64 = 1.0;

/// Contribution of a hit that starts a word.
pub const WORD_BOUNDARY_WEIGHT: f64 = 0.9;

/// Contribution of a hit that starts mid-word.
pub const SUBSTRING_WEIGHT: f64 = 0.75;

/// Ceiling for the subsequence tier (its [0, 1] score is scaled by this).
pub const FUZZY_CEILING: f64 = 0.7;

/// Ceiling for the edit-distance tier, reached only at distance 0.
pub const EDIT_DISTANCE_CEILING: f64 = 0.6;

/// Outcome of matching one query against one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    pub tier: MatchTier,
    /// Tier contribution in `[0, 1]`, before any field weighting.
    pub score: f64,
    /// Char ranges in the field, sorted, non-overlapping.
    pub spans: Vec<MatchSpan>,
}

#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    max_distance: usize,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_FUZZY_MAX_DISTANCE)
    }
}

impl FuzzyMatcher {
    /// `max_distance` is the spread window for the subsequence tier.
    pub fn new(max_distance: usize) -> Self {
        Self {
            max_distance: max_distance.max(1),
        }
    }

    /// Match raw strings. Both sides are folded (case and diacritics); spans
    /// index the original `field`.
    pub fn match_field(&self, query: &str, field: &str) -> Option<FieldMatch> {
        self.match_folded(&fold(query.trim()), &fold(field))
    }

    /// Match pre-folded text. The scorer folds each field once and reuses it.
    pub fn match_folded(&self, query: &[char], field: &[char]) -> Option<FieldMatch> {
        if query.is_empty() || field.is_empty() {
            return None;
        }

        self.contained(query, field)
            .or_else(|| self.subsequence(query, field))
            .or_else(|| self.edit_distance(query, field))
    }

    /// Tiers 1 to 3: the query appears verbatim.
    ///
    /// Every occurrence is classified and the strongest one is kept, so
    /// "server" in "webserver server" reports the standalone word.
    fn contained(&self, query: &[char], field: &[char]) -> Option<FieldMatch> {
        if query.len() > field.len() {
            return None;
        }

        let mut best: Option<(MatchTier, usize)> = None;
        for (start, window) in field.windows(query.len()).enumerate() {
            if window != query {
                continue;
            }
            let end = start + query.len();
            let starts_word = is_boundary_at(field, start);
            let ends_word = end == field.len() || is_word_separator(field[end]);
            let tier = match (starts_word, ends_word) {
                (true, true) => MatchTier::Exact,
                (true, false) => MatchTier::WordBoundary,
                _ => MatchTier::Substring,
            };
            if best.is_none_or(|(current, _)| tier < current) {
                best = Some((tier, start));
            }
            if tier == MatchTier::Exact {
                break;
            }
        }

        best.map(|(tier, start)| FieldMatch {
            tier,
            score: tier_weight(tier),
            spans: vec![MatchSpan {
                start,
                end: start + query.len(),
                tier,
            }],
        })
    }

    /// Tier 4: in-order characters with gaps.
    fn subsequence(&self, query: &[char], field: &[char]) -> Option<FieldMatch> {
        let found = subsequence_match(query, field, self.max_distance)?;
        let spans = found
            .ranges()
            .into_iter()
            .map(|(start, end)| MatchSpan {
                start,
                end,
                tier: MatchTier::FuzzyCharacter,
            })
            .collect();
        Some(FieldMatch {
            tier: MatchTier::FuzzyCharacter,
            score: found.score * FUZZY_CEILING,
            spans,
        })
    }

    /// Tier 5: the closest word within the edit budget (first one on ties).
    fn edit_distance(&self, query: &[char], field: &[char]) -> Option<FieldMatch> {
        if query.len() < MIN_EDIT_QUERY_LEN {
            return None;
        }

        let mut best: Option<(usize, usize, (usize, usize))> = None;
        for (start, end) in word_ranges(field) {
            let word = &field[start..end];
            if word.len() < MIN_EDIT_WORD_LEN {
                continue;
            }
            let budget = edit_budget(query.len(), word.len());
            if !within_chars(query, word, budget) {
                continue;
            }
            let distance = distance_chars(query, word);
            if best.is_none_or(|(d, _, _)| distance < d) {
                best = Some((distance, budget, (start, end)));
            }
        }

        best.map(|(distance, budget, (start, end))| FieldMatch {
            tier: MatchTier::EditDistance,
            score: edit_distance_weight(distance, budget),
            spans: vec![MatchSpan {
                start,
                end,
                tier: MatchTier::EditDistance,
            }],
        })
    }
}

/// Fixed contribution of the verbatim tiers.
pub fn tier_weight(tier: MatchTier) -> f64 {
    match tier {
        MatchTier::Exact => EXACT_WEIGHT,
        MatchTier::WordBoundary => WORD_BOUNDARY_WEIGHT,
        MatchTier::Substring => SUBSTRING_WEIGHT,
        MatchTier::FuzzyCharacter => FUZZY_CEILING,
        MatchTier::EditDistance => EDIT_DISTANCE_CEILING,
        MatchTier::Acronym | MatchTier::ExpandedTerm => 0.0,
    }
}

/// Scaled inversely to distance: `0.6 * (1 - d / (budget + 1))`.
pub fn edit_distance_weight(distance: usize, budget: usize) -> f64 {
    EDIT_DISTANCE_CEILING * (1.0 - distance as f64 / (budget + 1) as f64)
}
