// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers behind relevance.
//!
//! Only the relative ordering is load-bearing:
//!
//! ```text
//! EXACT_EQUALITY_BONUS > MAX_TEXT_SCORE + ACRONYM_BONUS + POPULARITY_CAP
//! POPULARITY_CAP       < smallest gap between distinct tier × field scores
//! ```
//!
//! The first keeps a guide whose name is exactly the query on top no matter
//! what else matches elsewhere. The second lets popularity break ties without
//! ever lifting a weaker match over a stronger one. Field weights matter here:
//! a mid-word hit on `displayName` (0.75 × 0.95) sits only 0.0125 above a
//! whole-word hit on `category` (1.0 × 0.7), and the tightest pair is
//! 0.5 (exact on description) against 0.49 (fuzzy ceiling on category).
//!
//! # Field weights
//!
//! | Field       | Weight |
//! |-------------|--------|
//! | name        | 1.0    |
//! | displayName | 0.95   |
//! | category    | 0.7    |
//! | topics      | 0.7    |
//! | description | 0.5    |
//! | language    | 0.5    |

use crate::types::Field;

/// Added when the whole query equals the whole name or display name.
pub const EXACT_EQUALITY_BONUS: f64 = 10.0;

/// Added when the query spells the initials of a field's leading words.
pub const ACRONYM_BONUS: f64 = 0.5;

/// Upper bound of the popularity boost.
pub const POPULARITY_CAP: f64 = 0.005;

/// Star count at which the popularity boost saturates.
pub const POPULARITY_SATURATION_STARS: u64 = 100_000;

/// Best possible tiered text score: an exact hit on the heaviest field.
pub const MAX_TEXT_SCORE: f64 = 1.0;

pub fn field_weight(field: Field) -> f64 {
    match field {
        Field::Name => 1.0,
        Field::DisplayName => 0.95,
        Field::Category | Field::Topics => 0.7,
        Field::Description | Field::Language => 0.5,
    }
}

/// Logarithmic in stars, monotonic, and never above [`POPULARITY_CAP`].
pub fn popularity_boost(stars: u64) -> f64 {
    let stars = stars.min(POPULARITY_SATURATION_STARS) as f64;
    let saturation = (POPULARITY_SATURATION_STARS as f64).ln_1p();
    (POPULARITY_CAP * stars.ln_1p() / saturation).min(POPULARITY_CAP)
}
