// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//! Insertions, deletions and substitutions all cost 1; no transpositions.

/// Queries shorter than this never use the edit-distance tier.
pub const MIN_EDIT_QUERY_LEN: usize = 4;

/// Words shorter than this are never compared by edit distance.
pub const MIN_EDIT_WORD_LEN: usize = 3;

/// Allowed edits: `floor(0.3 * max(query_len, word_len))`.
///
/// Integer arithmetic, so `floor(0.3 * 10)` is 3 and not a float rounding accident.
#[inline]
pub fn edit_budget(query_len: usize, word_len: usize) -> usize {
    query_len.max(word_len) * 3 / 10
}

/// Full Levenshtein distance between two char slices.
pub fn distance_chars(a: &[char], b: &[char]) -> usize {
    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }
    dp[b.len()]
}

/// Levenshtein distance counted in chars, not bytes.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_chars(&a, &b)
}

/// Are these char slices within `max` edits of each other?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return false immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
///
/// Both are sound: neither ever rejects a pair that is within `max`.
pub fn within_chars(a: &[char], b: &[char], max: usize) -> bool {
    if a.len().abs_diff(b.len()) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Every cell in later rows is at least this row's minimum
        if min_row > max {
            return false;
        }
    }

    dp[b.len()] <= max
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    within_chars(&a, &b, max)
}
