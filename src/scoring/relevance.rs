// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-entry relevance: one guide, one query, one number.
//!
//! ```text
//! total = max(direct, expansion_discount * expanded)   // best field × weight
//!       + EXACT_EQUALITY_BONUS   if query == name or displayName
//!       + ACRONYM_BONUS          if query spells leading initials
//!       + popularity_boost(stars)
//! ```
//!
//! An entry with no text, acronym or equality evidence is never emitted,
//! however popular it is. Everything is computed against folded text, which
//! has one char per original char, so spans index the original field as is.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::core::{field_weight, popularity_boost, ACRONYM_BONUS, EXACT_EQUALITY_BONUS};
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::fuzzy::FuzzyMatcher;
use crate::thesaurus::AliasTable;
use crate::types::{Field, GuideEntry, MatchSpan, MatchTier, ScoredResult};
use crate::util::normalize::{fold, normalize, word_ranges};

/// Fields the acronym bonus looks at.
const ACRONYM_FIELDS: [Field; 2] = [Field::DisplayName, Field::Description];

/// Shortest query considered for the acronym bonus.
const MIN_ACRONYM_LEN: usize = 2;

/// A query normalized and expanded once, then scored against many entries.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuery {
    /// Folded, trimmed, whitespace-collapsed query.
    pub normalized: String,
    /// Thesaurus expansion; always contains `normalized`.
    pub expanded: BTreeSet<String>,
    folded: Vec<char>,
    alternates: Vec<Vec<char>>,
}

impl PreparedQuery {
    pub fn new(raw: &str, thesaurus: &AliasTable) -> Self {
        let normalized = normalize(raw);
        let expanded = thesaurus.expand(&normalized);
        let alternates = expanded
            .iter()
            .filter(|term| **term != normalized && !term.is_empty())
            .map(|term| fold(term))
            .collect();
        Self {
            folded: normalized.chars().collect(),
            normalized,
            expanded,
            alternates,
        }
    }

    /// Length in chars of the normalized query.
    pub fn len(&self) -> usize {
        self.folded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Expanded terms other than the query itself, folded.
    pub fn alternates(&self) -> &[Vec<char>] {
        &self.alternates
    }

    pub(crate) fn folded(&self) -> &[char] {
        &self.folded
    }
}

/// One field's original length and folded text.
struct FoldedField {
    field: Field,
    len: usize,
    chars: Vec<char>,
}

/// Best weighted match across the fields for one term.
#[derive(Debug, Clone)]
struct Candidate {
    field: Field,
    score: f64,
    spans: Vec<MatchSpan>,
}

#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    matcher: FuzzyMatcher,
    thesaurus: AliasTable,
    expansion_discount: f64,
    threshold: f64,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(&SearchConfig::default(), AliasTable::builtin().clone())
    }
}

impl RelevanceScorer {
    pub fn new(config: &SearchConfig, thesaurus: AliasTable) -> Self {
        Self {
            matcher: FuzzyMatcher::new(config.fuzzy_max_distance),
            thesaurus,
            expansion_discount: config.expansion_discount,
            threshold: config.score_threshold,
        }
    }

    pub fn thesaurus(&self) -> &AliasTable {
        &self.thesaurus
    }

    pub fn prepare(&self, raw: &str) -> PreparedQuery {
        let query = PreparedQuery::new(raw, &self.thesaurus);
        tracing::trace!(
            query = %query.normalized,
            expanded = query.expanded.len(),
            "query prepared"
        );
        query
    }

    /// Score a raw query. Prefer [`Self::score_prepared`] across a catalog.
    pub fn score(&self, entry: &Arc<GuideEntry>, raw: &str) -> Result<Option<ScoredResult>> {
        self.score_prepared(entry, &self.prepare(raw))
    }

    /// Score one entry. `Ok(None)` means "not relevant"; `Err` means the
    /// entry could not be scored and should be skipped.
    pub fn score_prepared(
        &self,
        entry: &Arc<GuideEntry>,
        query: &PreparedQuery,
    ) -> Result<Option<ScoredResult>> {
        if query.is_empty() {
            return Ok(None);
        }

        let fields: Vec<FoldedField> = Field::ALL
            .iter()
            .map(|&field| {
                let text = entry.field(field);
                FoldedField {
                    field,
                    len: text.chars().count(),
                    chars: fold(&text),
                }
            })
            .collect();

        let direct = self.best_field(query.folded(), &fields);
        let expanded = query
            .alternates()
            .iter()
            .filter_map(|term| self.best_field(term, &fields))
            .map(|c| Candidate {
                score: c.score * self.expansion_discount,
                spans: retag(c.spans, MatchTier::ExpandedTerm),
                ..c
            })
            .fold(None, keep_better);
        // direct evidence wins ties
        let text = match (direct, expanded) {
            (Some(d), Some(e)) if e.score > d.score => Some(e),
            (Some(d), _) => Some(d),
            (None, e) => e,
        };

        let equality = [&entry.name, &entry.display_name]
            .into_iter()
            .any(|value| normalize(value) == query.normalized);
        let acronym = acronym_match(query.folded(), &fields);

        if text.is_none() && acronym.is_none() && !equality {
            return Ok(None);
        }

        let mut total = text.as_ref().map_or(0.0, |c| c.score);
        if equality {
            total += EXACT_EQUALITY_BONUS;
        }
        if acronym.is_some() {
            total += ACRONYM_BONUS;
        }
        total += popularity_boost(entry.stars);

        if !total.is_finite() {
            return Err(SearchError::ScoringFailure {
                name: entry.name.clone(),
                reason: format!("non-finite score {total}"),
            });
        }
        if total < self.threshold {
            return Ok(None);
        }

        let winner = text.or(acronym).unwrap_or(Candidate {
            field: if normalize(&entry.name) == query.normalized {
                Field::Name
            } else {
                Field::DisplayName
            },
            score: 0.0,
            spans: Vec::new(),
        });

        let len = fields
            .iter()
            .find(|f| f.field == winner.field)
            .map_or(0, |f| f.len);
        for span in &winner.spans {
            span.check(len)?;
        }

        Ok(Some(ScoredResult {
            entry: Arc::clone(entry),
            score: total,
            matched_field: winner.field,
            spans: winner.spans,
        }))
    }

    /// Spans for displaying `text`: the direct query first, then any
    /// expanded term, then initials.
    pub fn spans_for(&self, query: &PreparedQuery, text: &str) -> Vec<MatchSpan> {
        if query.is_empty() {
            return Vec::new();
        }
        let folded = fold(text);
        let direct = self.matcher.match_folded(query.folded(), &folded);
        if let Some(m) = direct.as_ref().filter(|m| is_verbatim(m.tier)) {
            return m.spans.clone();
        }

        // a contiguous alias hit reads better than scattered direct chars
        let mut alias_fallback = None;
        for term in query.alternates() {
            if let Some(m) = self.matcher.match_folded(term, &folded) {
                if is_verbatim(m.tier) {
                    return retag(m.spans, MatchTier::ExpandedTerm);
                }
                alias_fallback.get_or_insert(m.spans);
            }
        }

        if let Some(m) = direct {
            return m.spans;
        }
        if let Some(spans) = alias_fallback {
            return retag(spans, MatchTier::ExpandedTerm);
        }
        initials(query.folded(), &folded).unwrap_or_default()
    }

    fn best_field(&self, term: &[char], fields: &[FoldedField]) -> Option<Candidate> {
        fields
            .iter()
            .filter_map(|f| {
                self.matcher.match_folded(term, &f.chars).map(|m| Candidate {
                    field: f.field,
                    score: m.score * field_weight(f.field),
                    spans: m.spans,
                })
            })
            .fold(None, keep_better)
    }
}

/// Fold step keeping the first of equally good candidates.
fn keep_better(best: Option<Candidate>, next: Candidate) -> Option<Candidate> {
    match best {
        Some(b) if b.score >= next.score => Some(b),
        _ => Some(next),
    }
}

/// Tiers whose single span covers the query verbatim.
fn is_verbatim(tier: MatchTier) -> bool {
    matches!(
        tier,
        MatchTier::Exact | MatchTier::WordBoundary | MatchTier::Substring
    )
}

fn retag(spans: Vec<MatchSpan>, tier: MatchTier) -> Vec<MatchSpan> {
    spans.into_iter().map(|s| s.with_tier(tier)).collect()
}

fn acronym_match(query: &[char], fields: &[FoldedField]) -> Option<Candidate> {
    fields
        .iter()
        .filter(|f| ACRONYM_FIELDS.contains(&f.field))
        .find_map(|f| {
            initials(query, &f.chars).map(|spans| Candidate {
                field: f.field,
                score: 0.0,
                spans,
            })
        })
}

/// If the first `query.len()` words of `field` start with the query's chars,
/// one span per initial.
fn initials(query: &[char], field: &[char]) -> Option<Vec<MatchSpan>> {
    if query.len() < MIN_ACRONYM_LEN || !query.iter().all(|c| c.is_alphanumeric()) {
        return None;
    }
    let starts: Vec<usize> = word_ranges(field)
        .into_iter()
        .map(|(start, _)| start)
        .filter(|&start| field[start].is_alphanumeric())
        .take(query.len())
        .collect();
    if starts.len() < query.len() {
        return None;
    }
    let spelled = starts.iter().zip(query).all(|(&pos, &q)| field[pos] == q);
    spelled.then(|| {
        starts
            .into_iter()
            .map(|start| MatchSpan {
                start,
                end: start + 1,
                tier: MatchTier::Acronym,
            })
            .collect()
    })
}
