// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole search passes.
//!
//! Any query against the sample catalog must return a ranked, bounded list
//! and never panic.

#![no_main]

use std::sync::LazyLock;

use guidefind::testing::sample_catalog;
use guidefind::{SearchConfig, SearchEngine};
use libfuzzer_sys::fuzz_target;

static ENGINE: LazyLock<SearchEngine> = LazyLock::new(|| {
    SearchEngine::new(SearchConfig::default())
        .expect("default config is valid")
        .with_catalog(sample_catalog())
});

fuzz_target!(|query: &str| {
    let query: String = query.chars().take(64).collect();
    let hits = ENGINE.search(&query).expect("catalog is loaded");
    assert!(hits.len() <= ENGINE.config().max_results);
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
});
