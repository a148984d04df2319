// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored guides get sorted.
//!
//! Score decides first. Popularity only separates equal scores, and the
//! name keys make the order total so two runs over the same catalog always
//! agree.

use crate::types::ScoredResult;
use std::cmp::Ordering;

/// Compare two results for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Stars** - descending
/// 3. **Display name** - ascending
/// 4. **Name** - ascending, final tiebreaker
pub fn compare_results(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.entry.stars.cmp(&a.entry.stars))
        .then_with(|| a.entry.display_name.cmp(&b.entry.display_name))
        .then_with(|| a.entry.name.cmp(&b.entry.name))
}

/// Sort in place and keep the first `limit`.
pub fn rank(results: &mut Vec<ScoredResult>, limit: usize) {
    results.sort_by(compare_results);
    results.truncate(limit);
}
