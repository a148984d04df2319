// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: does this query match this field, how well, and where?
//!
//! Three pieces. `edit` is plain edit distance plus a bounded variant
//! with early exits. `subsequence` is the in-order character scan that rewards
//! tight, word-aligned hits. `matcher` chains the tiers (exact → word-boundary
//! → substring → fuzzy-character → edit-distance) and stops at the first one
//! that succeeds.

mod edit;
mod matcher;
mod subsequence;

pub use edit::*;
pub use matcher::*;
pub use subsequence::*;
