//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::Arc;

use guidefind::{Catalog, GuideEntry, SearchConfig, SearchEngine, SearchHit};

// Re-export canonical test utilities from guidefind::testing
pub use guidefind::testing::{entry_with, make_entry, sample_catalog, sample_entries};

/// Engine with default settings over the sample catalog.
pub fn sample_engine() -> SearchEngine {
    engine_over(sample_catalog())
}

pub fn engine_over(catalog: Arc<Catalog>) -> SearchEngine {
    SearchEngine::new(SearchConfig::default())
        .expect("default config is valid")
        .with_catalog(catalog)
}

pub fn engine_for(entries: Vec<GuideEntry>) -> SearchEngine {
    engine_over(Catalog::new(entries).into_snapshot())
}

/// Names of the hits, in rank order.
pub fn names(hits: &[SearchHit]) -> Vec<&str> {
    hits.iter().map(|h| h.entry.name.as_str()).collect()
}

/// Assert the ranking contract: score desc, then stars desc, then display name asc.
pub fn assert_ranked(hits: &[SearchHit]) {
    for pair in hits.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score >= b.score,
            "{} before {} but scores {} < {}",
            a.entry.name,
            b.entry.name,
            a.score,
            b.score
        );
        if a.score == b.score {
            assert!(a.entry.stars >= b.entry.stars);
            if a.entry.stars == b.entry.stars {
                assert!(a.entry.display_name <= b.entry.display_name);
            }
        }
    }
}
