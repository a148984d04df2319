//! The prefilter never drops an entry the scorer would keep.

use std::sync::Arc;

use guidefind::index::prefilter_terms;
use guidefind::{Catalog, RelevanceScorer, SearchIndex};
use proptest::prelude::*;

use super::strategies::{catalog_strategy, query_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_prefilter_sound(entries in catalog_strategy(), query in query_strategy()) {
        let catalog = Catalog::new(entries);
        let index = SearchIndex::build(&catalog);
        let scorer = RelevanceScorer::default();
        let prepared = scorer.prepare(&query);

        for record in index.records() {
            let entry: &Arc<_> = &catalog.entries()[record.entry_idx];
            let accepted = scorer.score_prepared(entry, &prepared).unwrap().is_some();
            if accepted {
                prop_assert!(
                    prefilter_terms(record, prepared.expanded.iter().map(String::as_str)),
                    "prefilter rejected {:?} for {:?}",
                    entry.name,
                    query
                );
            }
        }
    }
}
