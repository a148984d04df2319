//! Ranking order, idempotence and equality dominance.

use guidefind::normalize;
use proptest::prelude::*;

use super::common::{assert_ranked, engine_for};
use super::strategies::{catalog_strategy, query_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_results_sorted(entries in catalog_strategy(), query in query_strategy()) {
        let hits = engine_for(entries).search(&query).unwrap();
        assert_ranked(&hits);
        prop_assert!(hits.len() <= 8);
    }

    #[test]
    fn prop_search_idempotent(entries in catalog_strategy(), query in query_strategy()) {
        let engine = engine_for(entries);
        let first = engine.search(&query).unwrap();
        let second = engine.search(&query).unwrap();
        let a: Vec<_> = first.iter().map(|h| (h.entry.name.clone(), h.score)).collect();
        let b: Vec<_> = second.iter().map(|h| (h.entry.name.clone(), h.score)).collect();
        prop_assert_eq!(a, b);
    }

    /// Searching for an entry's exact display name puts an entry with that
    /// display name first.
    #[test]
    fn prop_exact_display_name_on_top(entries in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let target = pick.get(&entries).display_name.clone();
        let hits = engine_for(entries).search(&target).unwrap();
        prop_assert!(!hits.is_empty());
        let top = &hits[0].entry;
        prop_assert!(
            normalize(&top.display_name) == normalize(&target)
                || normalize(&top.name) == normalize(&target)
        );
    }
}
