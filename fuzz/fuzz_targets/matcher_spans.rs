// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tier chain.
//!
//! Arbitrary Unicode in both query and field: spans must stay inside the
//! field, stay sorted and disjoint, and the highlighter must never slice
//! through a char boundary.

#![no_main]

use arbitrary::Arbitrary;
use guidefind::{FuzzyMatcher, Highlighter};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    field: String,
    max_distance: u8,
}

fuzz_target!(|input: MatchInput| {
    let query: String = input.query.chars().take(32).collect();
    let field: String = input.field.chars().take(256).collect();
    let matcher = FuzzyMatcher::new(usize::from(input.max_distance));

    let Some(m) = matcher.match_field(&query, &field) else {
        return;
    };
    let len = field.chars().count();
    assert!((0.0..=1.0).contains(&m.score), "score {}", m.score);
    for span in &m.spans {
        assert!(span.start < span.end && span.end <= len, "{:?} in {}", span, len);
    }
    for pair in m.spans.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }

    let rendered = Highlighter::new("[", "]").render(&field, &m.spans);
    assert!(rendered.chars().count() >= len);
});
