// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the matcher, the index and the scorer.
//!
//! Everything that compares strings goes through `normalize`. Folding is done
//! one character at a time so a folded field has exactly as many characters
//! as the original, which is what lets match spans point straight back into
//! the text the user sees.

pub mod normalize;
