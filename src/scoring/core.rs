// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The weight table behind search ranking.
//!
//! Scores are small integers, summed per term and then across terms. The
//! table is deliberately flat: no position bonus, no field normalization, no
//! term frequency. Tests assert exact sums, so these numbers are part of the
//! public contract.
//!
//! # Weight table
//!
//! | Hit                      | Score | Constant                  |
//! |--------------------------|-------|---------------------------|
//! | Term in id               | 15    | `ID_MATCH_SCORE`          |
//! | Term in title            | 10    | `TITLE_MATCH_SCORE`       |
//! | Term in summary          | 8     | `SUMMARY_MATCH_SCORE`     |
//! | Term in any tag field    | 7     | `TAG_MATCH_SCORE`         |
//! | Term in description      | 5     | `DESCRIPTION_MATCH_SCORE` |
//! | Term anywhere (haystack) | 3     | `HAYSTACK_MATCH_SCORE`    |
//! | Similarity > 0.7         | 2     | `SIMILARITY_MATCH_SCORE`  |
//!
//! The haystack contains every other field, so any field hit also earns the
//! haystack bonus. That overlap is part of the table.

use serde::{Deserialize, Serialize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Term appears in the record id.
pub const ID_MATCH_SCORE: u32 = 15;

/// Term appears in the title.
pub const TITLE_MATCH_SCORE: u32 = 10;

/// Term appears in the summary.
pub const SUMMARY_MATCH_SCORE: u32 = 8;

/// Term appears in at least one tag-like field: technology, theme,
/// stakeholders, impact area, data/resource type, solution type, category,
/// organization or department. Awarded once per term however many fields hit.
pub const TAG_MATCH_SCORE: u32 = 7;

/// Term appears in the description.
pub const DESCRIPTION_MATCH_SCORE: u32 = 5;

/// Term appears anywhere in the concatenated haystack.
pub const HAYSTACK_MATCH_SCORE: u32 = 3;

/// Term is more than [`SIMILARITY_THRESHOLD`](crate::SIMILARITY_THRESHOLD)
/// similar to the whole haystack.
pub const SIMILARITY_MATCH_SCORE: u32 = 2;

/// Per-field weights, one entry per row of the weight table.
///
/// [`ScoreWeights::STANDARD`] is what `search` uses. Custom tables go through
/// `search_with_weights`; a weight of 0 switches that signal off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub id: u32,
    pub title: u32,
    pub summary: u32,
    pub tags: u32,
    pub description: u32,
    pub haystack: u32,
    pub similarity: u32,
}

impl ScoreWeights {
    pub const STANDARD: ScoreWeights = ScoreWeights {
        id: ID_MATCH_SCORE,
        title: TITLE_MATCH_SCORE,
        summary: SUMMARY_MATCH_SCORE,
        tags: TAG_MATCH_SCORE,
        description: DESCRIPTION_MATCH_SCORE,
        haystack: HAYSTACK_MATCH_SCORE,
        similarity: SIMILARITY_MATCH_SCORE,
    };
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Which fields a single query term landed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldHits {
    pub id: bool,
    pub title: bool,
    pub summary: bool,
    pub tags: bool,
    pub description: bool,
    pub haystack: bool,
    pub similar: bool,
}

impl FieldHits {
    /// Sum of the weights for every field that was hit.
    pub fn score(&self, weights: &ScoreWeights) -> u32 {
        [
            (self.id, weights.id),
            (self.title, weights.title),
            (self.summary, weights.summary),
            (self.tags, weights.tags),
            (self.description, weights.description),
            (self.haystack, weights.haystack),
            (self.similar, weights.similarity),
        ]
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, weight)| weight)
        .sum()
    }

    /// Did the term land anywhere?
    pub fn any(&self) -> bool {
        self.id
            || self.title
            || self.summary
            || self.tags
            || self.description
            || self.haystack
            || self.similar
    }

    /// Names of the fields that were hit, in weight-table order.
    pub fn labels(&self) -> Vec<&'static str> {
        [
            (self.id, "id"),
            (self.title, "title"),
            (self.summary, "summary"),
            (self.tags, "tags"),
            (self.description, "description"),
            (self.haystack, "anywhere"),
            (self.similar, "similar"),
        ]
        .into_iter()
        .filter_map(|(hit, label)| hit.then_some(label))
        .collect()
    }
}
