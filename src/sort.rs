// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The sort stage: reorder a result list by a user-selected criterion.
//!
//! Relevance order is whatever the ranking engine produced, so "sort by
//! relevance" does nothing. The submission sorts are stable: records with
//! equal counts keep the order they arrived in, which after a search is
//! their relevance order.

use crate::types::ProblemStatement;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How to order a result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Keep the incoming order.
    #[default]
    Relevance,
    /// Highest submission count first.
    #[serde(alias = "submissions_high")]
    MostSubmissions,
    /// Lowest submission count first.
    #[serde(alias = "submissions_low")]
    FewestSubmissions,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [
        SortMode::Relevance,
        SortMode::MostSubmissions,
        SortMode::FewestSubmissions,
    ];

    /// Reorder `items` in place by submission count, read through `submissions`.
    /// Stable, so equal counts keep their incoming order.
    pub fn apply<T>(self, items: &mut [T], submissions: impl Fn(&T) -> u32) {
        match self {
            SortMode::Relevance => {}
            SortMode::MostSubmissions => {
                items.sort_by_key(|item| std::cmp::Reverse(submissions(item)))
            }
            SortMode::FewestSubmissions => items.sort_by_key(|item| submissions(item)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::MostSubmissions => "mostSubmissions",
            SortMode::FewestSubmissions => "fewestSubmissions",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "relevance" => Ok(SortMode::Relevance),
            "mostSubmissions" | "most-submissions" | "submissions_high" => {
                Ok(SortMode::MostSubmissions)
            }
            "fewestSubmissions" | "fewest-submissions" | "submissions_low" => {
                Ok(SortMode::FewestSubmissions)
            }
            other => Err(format!(
                "unknown sort mode '{}' (expected relevance, mostSubmissions or fewestSubmissions)",
                other
            )),
        }
    }
}

/// A new list ordered by `mode`. The input is never reordered in place.
pub fn sort_records<'a, I>(records: I, mode: SortMode) -> Vec<&'a ProblemStatement>
where
    I: IntoIterator<Item = &'a ProblemStatement>,
{
    let mut sorted: Vec<&'a ProblemStatement> = records.into_iter().collect();
    mode.apply(&mut sorted, |record| record.submissions());
    sorted
}
