// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! Symmetry, identity, the length bounds, and agreement between the full DP
//! and the early-exit variant at every threshold up to the true distance.

#![no_main]

use arbitrary::Arbitrary;
use guidefind::{levenshtein, levenshtein_within};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Pair {
    a: String,
    b: String,
}

/// First `max` chars, so long inputs do not time out the O(nm) DP.
fn cap(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fuzz_target!(|input: Pair| {
    let a = cap(&input.a, 64);
    let b = cap(&input.b, 64);

    let d = levenshtein(&a, &b);
    assert_eq!(d, levenshtein(&b, &a), "asymmetric: {:?} {:?}", a, b);
    assert_eq!(levenshtein(&a, &a), 0);

    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(d >= la.abs_diff(lb));
    assert!(d <= la.max(lb));

    for max in 0..=d.min(8) {
        assert_eq!(levenshtein_within(&a, &b, max), d <= max, "max={} d={}", max, d);
    }
});
