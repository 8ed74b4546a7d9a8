// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One search request, end to end.
//!
//! ```text
//! records ──▶ search(query) ──▶ filter_by_tags ──▶ filter_by_submissions ──▶ sort_records
//! ```
//!
//! Every stage borrows from the corpus and every call starts from scratch.
//! Nothing is cached between requests. [`SearchRequest::run_scored`] runs the
//! same stages but keeps each survivor's ranking score.

use crate::facets::{filter_by_submissions, filter_by_tags, matches_tag};
use crate::search::{search, search_scored};
use crate::sort::{sort_records, SortMode};
use crate::types::{ProblemStatement, ScoredRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::RangeInclusive;
use tracing::debug;

/// Everything a user can set: query text, selected tags, a submission-count
/// range, and a sort order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub tags: HashSet<String>,
    /// Inclusive bounds; `None` keeps every count.
    pub submissions: Option<RangeInclusive<u32>>,
    pub sort: SortMode,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_submissions(mut self, range: RangeInclusive<u32>) -> Self {
        self.submissions = Some(range);
        self
    }

    pub fn sorted_by(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Run search → tag filter → range filter → sort over `records`.
    pub fn run<'a, I>(&self, records: I) -> Vec<&'a ProblemStatement>
    where
        I: IntoIterator<Item = &'a ProblemStatement>,
    {
        let matched = search(&self.query, records);
        let tagged = filter_by_tags(matched, &self.tags);
        let in_range = match &self.submissions {
            Some(range) => filter_by_submissions(tagged, range),
            None => tagged,
        };
        let sorted = sort_records(in_range, self.sort);

        debug!(
            query = %self.query,
            tags = self.tags.len(),
            sort = %self.sort,
            results = sorted.len(),
            "pipeline"
        );
        sorted
    }

    /// Like [`run`](Self::run), keeping the score each record was ranked by.
    /// For an empty query every score is 0.
    pub fn run_scored<'a, I>(&self, records: I) -> Vec<ScoredRecord<'a>>
    where
        I: IntoIterator<Item = &'a ProblemStatement>,
    {
        let mut kept: Vec<ScoredRecord<'a>> = search_scored(&self.query, records)
            .into_iter()
            .filter(|entry| self.keeps(entry.record))
            .collect();
        self.sort.apply(&mut kept, |entry| entry.record.submissions());

        debug!(
            query = %self.query,
            tags = self.tags.len(),
            sort = %self.sort,
            results = kept.len(),
            "pipeline (scored)"
        );
        kept
    }

    /// Does `record` pass the tag and range stages?
    fn keeps(&self, record: &ProblemStatement) -> bool {
        let tagged = self.tags.is_empty() || self.tags.iter().any(|tag| matches_tag(record, tag));
        let in_range = match &self.submissions {
            Some(range) => range.contains(&record.submissions()),
            None => true,
        };
        tagged && in_range
    }
}
