// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: turn a free-text query into a ranked subset of the corpus.
//!
//! No index. Each call lowercases every record's searchable fields once,
//! checks every query term against them, and ranks what scored. For a corpus
//! in the low thousands that is a few milliseconds, and it means there is
//! nothing to keep in sync when the corpus changes.

mod engine;
mod fields;

pub use engine::*;
pub use fields::*;
