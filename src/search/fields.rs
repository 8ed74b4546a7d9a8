// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lowercased views of a record's searchable fields.
//!
//! The haystack is every searchable field joined by single spaces, in a fixed
//! order. Empty lists still contribute their (empty) slot, so two adjacent
//! spaces are normal. The similarity bonus compares terms against the whole
//! haystack, so its exact length matters.

use crate::fuzzy::{similarity_exceeds, SIMILARITY_THRESHOLD};
use crate::scoring::FieldHits;
use crate::types::ProblemStatement;
use crate::utils::lowercase_all;

/// Precomputed lowercase fields for one record.
#[derive(Debug, Clone)]
pub struct SearchFields {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    /// Every value that counts for the tag bonus: technology, theme,
    /// stakeholders, impact area, data/resource type, solution type,
    /// category, organization, department.
    pub tags: Vec<String>,
    pub haystack: String,
}

impl SearchFields {
    pub fn new(record: &ProblemStatement) -> Self {
        let tags = lowercase_all(
            record
                .technology
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(record.theme.as_str()))
                .chain(record.stakeholders.iter().map(String::as_str))
                .chain(record.impact_area.iter().map(String::as_str))
                .chain(record.data_resource_type.iter().map(String::as_str))
                .chain(record.solution_type.values())
                .chain([
                    record.category.as_str(),
                    record.organization.as_str(),
                    record.department.as_str(),
                ]),
        );

        Self {
            id: record.id.to_lowercase(),
            title: record.title.to_lowercase(),
            summary: record.summary.to_lowercase(),
            description: record.description.to_lowercase(),
            tags,
            haystack: haystack(record),
        }
    }

    /// Which fields does `term` (already lowercase) land in?
    pub fn hits(&self, term: &str) -> FieldHits {
        FieldHits {
            id: self.id.contains(term),
            title: self.title.contains(term),
            summary: self.summary.contains(term),
            tags: self.tags.iter().any(|tag| tag.contains(term)),
            description: self.description.contains(term),
            haystack: self.haystack.contains(term),
            similar: similarity_exceeds(term, &self.haystack, SIMILARITY_THRESHOLD),
        }
    }
}

/// The lowercase concatenation of every searchable field of `record`.
pub fn haystack(record: &ProblemStatement) -> String {
    let solution_type = record.solution_type.joined();
    let difficulty = record.difficulty.joined();
    let technology = record.technology.join(" ");
    let stakeholders = record.stakeholders.join(" ");
    let impact_area = record.impact_area.join(" ");
    let data_resource_type = record.data_resource_type.join(" ");

    let parts: [&str; 14] = [
        &record.id,
        &record.title,
        &record.summary,
        &record.description,
        &record.theme,
        &record.organization,
        &record.department,
        &record.category,
        &solution_type,
        &difficulty,
        &technology,
        &stakeholders,
        &impact_area,
        &data_resource_type,
    ];
    parts.join(" ").to_lowercase()
}
