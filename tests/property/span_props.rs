//! Span bounds and non-overlap, for the matcher and for scored results.

use std::sync::Arc;

use guidefind::{merge_spans, FuzzyMatcher, MatchSpan, RelevanceScorer};
use proptest::prelude::*;

use super::strategies::{display_strategy, entry_strategy, query_strategy, text_strategy};

fn assert_well_formed(spans: &[MatchSpan], len: usize) -> Result<(), TestCaseError> {
    for span in spans {
        prop_assert!(span.start < span.end, "empty span {:?}", span);
        prop_assert!(span.end <= len, "span {:?} past {}", span, len);
    }
    for pair in spans.windows(2) {
        prop_assert!(pair[0].end <= pair[1].start, "overlap {:?}", pair);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_matcher_spans_in_bounds(query in query_strategy(), field in text_strategy()) {
        if let Some(m) = FuzzyMatcher::default().match_field(&query, &field) {
            assert_well_formed(&m.spans, field.chars().count())?;
            prop_assert!((0.0..=1.0).contains(&m.score));
        }
    }

    #[test]
    fn prop_matcher_spans_in_bounds_non_ascii(query in query_strategy(), field in display_strategy()) {
        if let Some(m) = FuzzyMatcher::default().match_field(&query, &field) {
            assert_well_formed(&m.spans, field.chars().count())?;
        }
    }

    #[test]
    fn prop_scored_spans_fit_matched_field(entry in entry_strategy(), query in query_strategy()) {
        let entry = Arc::new(entry);
        if let Some(result) = RelevanceScorer::default().score(&entry, &query).unwrap() {
            let len = entry.field(result.matched_field).chars().count();
            assert_well_formed(&result.spans, len)?;
        }
    }

    #[test]
    fn prop_merged_spans_disjoint(raw in prop::collection::vec((0usize..30, 1usize..6), 0..8)) {
        let spans: Vec<MatchSpan> = raw
            .into_iter()
            .map(|(start, len)| MatchSpan { start, end: start + len, tier: guidefind::MatchTier::Substring })
            .collect();
        let merged = merge_spans(&spans);
        for pair in merged.windows(2) {
            prop_assert!(pair[0].1 < pair[1].0);
        }
        for span in &spans {
            prop_assert!(merged.iter().any(|(s, e)| *s <= span.start && span.end <= *e));
        }
    }
}
