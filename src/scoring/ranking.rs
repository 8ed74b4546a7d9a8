// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored records get ordered.
//!
//! Score descending, nothing else. Ties keep corpus order because the sort is
//! stable; there is no title or id tiebreaker.

use crate::types::ScoredRecord;
use std::cmp::Ordering;

/// Compare two scored records for ranking: higher score first.
pub fn compare_scored(a: &ScoredRecord<'_>, b: &ScoredRecord<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Drop zero scores and order the rest by descending score, stably.
pub fn rank(mut scored: Vec<ScoredRecord<'_>>) -> Vec<ScoredRecord<'_>> {
    scored.retain(|entry| entry.score > 0);
    scored.sort_by(compare_scored);
    scored
}
