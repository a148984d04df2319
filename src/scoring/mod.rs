// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how a guide gets its number.
//!
//! `core` holds the weights and bonuses, `relevance` turns one entry plus one
//! query into a score, and `ranking` decides the final order.

mod core;
pub mod ranking;
mod relevance;

pub use core::*;
pub use relevance::*;
