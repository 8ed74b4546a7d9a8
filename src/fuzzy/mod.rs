// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Plain Levenshtein for exact distances, a bounded variant that gives up as
//! soon as the budget is blown, and the normalized similarity the ranking
//! engine uses as its last, smallest bonus.

mod levenshtein;

pub use levenshtein::*;
