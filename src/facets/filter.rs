// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tag filtering: keep records that match any selected tag in any field.
//!
//! This broadens rather than narrows. Selecting "Robotics" and "Farmers"
//! keeps robotics records and farmer records, not only records that are both.
//!
//! Matching is exact string equality, split two ways:
//! - list membership for technology, stakeholders, impact area, data/resource type
//! - equality against difficulty and solution type (any of their values) and
//!   against theme, category, organization and department

use crate::types::ProblemStatement;
use std::collections::HashSet;
use tracing::debug;

/// Records matching at least one of `selected`. An empty selection returns
/// `records` unchanged.
pub fn filter_by_tags<'a, I>(records: I, selected: &HashSet<String>) -> Vec<&'a ProblemStatement>
where
    I: IntoIterator<Item = &'a ProblemStatement>,
{
    if selected.is_empty() {
        return records.into_iter().collect();
    }

    let kept: Vec<&'a ProblemStatement> = records
        .into_iter()
        .filter(|record| selected.iter().any(|tag| matches_tag(record, tag)))
        .collect();

    debug!(tags = selected.len(), kept = kept.len(), "filter_by_tags");
    kept
}

/// Does `record` carry `tag` in any facet field?
pub fn matches_tag(record: &ProblemStatement, tag: &str) -> bool {
    let in_list = |values: &[String]| values.iter().any(|value| value == tag);

    in_list(&record.technology)
        || in_list(&record.stakeholders)
        || in_list(&record.impact_area)
        || in_list(&record.data_resource_type)
        || record.solution_type.contains(tag)
        || record.difficulty.contains(tag)
        || record.theme == tag
        || record.category == tag
        || record.organization == tag
        || record.department == tag
}
