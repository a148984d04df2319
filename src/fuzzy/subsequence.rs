// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-order character scan ("ngx" finds "NGinX").
//!
//! Not edit distance: the scan walks the field once, greedily taking the
//! next query char wherever it appears. Every query char must be found or
//! the whole tier fails; there is no partial credit.
//!
//! Scoring, per matched char:
//! - `0.8 / len(query)` base
//! - `0.1 + 0.05 * run` when it directly follows the previous match
//! - `0.1` when it starts a word
//!
//! then the total is multiplied by a spread penalty
//! `max(0.1, 1 - spread / min(max_distance, len(field)))`, a length bonus
//! `max(0, (50 - len(field)) / 100)` is added, and the result is clamped to
//! `[0, 1]`.

use crate::util::normalize::is_boundary_at;

/// Queries shorter than this never take the subsequence tier.
pub const MIN_SUBSEQUENCE_QUERY_LEN: usize = 3;

const BASE_CHAR_WEIGHT: f64 = 0.8;
const RUN_BONUS: f64 = 0.1;
const RUN_STEP: f64 = 0.05;
const BOUNDARY_BONUS: f64 = 0.1;
const MIN_SPREAD_FACTOR: f64 = 0.1;
const SHORT_FIELD_LEN: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SubsequenceMatch {
    /// Clamped to `[0, 1]`.
    pub score: f64,
    /// Field position of each query char, strictly increasing.
    pub positions: Vec<usize>,
}

impl SubsequenceMatch {
    /// Collapse runs of adjacent positions into `[start, end)` ranges.
    pub fn ranges(&self) -> Vec<(usize, usize)> {
        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for &pos in &self.positions {
            match ranges.last_mut() {
                Some((_, end)) if *end == pos => *end = pos + 1,
                _ => ranges.push((pos, pos + 1)),
            }
        }
        ranges
    }
}

/// Scan `field` for `query` as a subsequence. Both must already be folded.
pub fn subsequence_match(
    query: &[char],
    field: &[char],
    max_distance: usize,
) -> Option<SubsequenceMatch> {
    let query_len = query.len();
    if query_len < MIN_SUBSEQUENCE_QUERY_LEN || query_len > field.len() {
        return None;
    }

    let per_char = BASE_CHAR_WEIGHT / query_len as f64;
    let mut positions = Vec::with_capacity(query_len);
    let mut score = 0.0;
    let mut run = 0usize;

    for (pos, &c) in field.iter().enumerate() {
        if positions.len() == query_len {
            break;
        }
        if c != query[positions.len()] {
            continue;
        }

        score += per_char;
        match positions.last() {
            Some(&prev) if prev + 1 == pos => {
                run += 1;
                score += RUN_BONUS + RUN_STEP * run as f64;
            }
            _ => run = 0,
        }
        if is_boundary_at(field, pos) {
            score += BOUNDARY_BONUS;
        }
        positions.push(pos);
    }

    if positions.len() < query_len {
        return None;
    }

    let spread = (positions[query_len - 1] - positions[0]) as f64;
    let window = max_distance.min(field.len()).max(1) as f64;
    score *= (1.0 - spread / window).max(MIN_SPREAD_FACTOR);
    score += ((SHORT_FIELD_LEN - field.len() as f64) / 100.0).max(0.0);

    Some(SubsequenceMatch {
        score: score.clamp(0.0, 1.0),
        positions,
    })
}
