// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Every query term is checked against a fixed set of fields, and each field
//! it lands in adds a fixed weight. Nothing is normalized or capped: a term
//! that hits the title also hits the haystack, and both count.

mod core;
pub mod ranking;

pub use core::*;
