// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The facet catalog: every category a user can filter on, with its values.
//!
//! Built once per corpus. The six fixed categories always come first with
//! their full curated vocabulary. After them come up to four categories
//! discovered from the corpus (theme, category, organization, department),
//! each sorted and each present only if the corpus has at least one value.
//! Values are taken as-is, so an empty department is the value `""`.

use super::taxonomy::{CATEGORY, DEPARTMENT, FIXED_TAXONOMY, ORGANIZATION, THEME};
use crate::types::ProblemStatement;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Ordered mapping from category label to its values.
///
/// Iteration follows insertion order, which is display order. Serializes as a
/// JSON object with keys in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetCatalog {
    entries: Vec<(String, Vec<String>)>,
}

impl FacetCatalog {
    /// A catalog holding only the fixed taxonomy.
    pub fn fixed() -> Self {
        let entries = FIXED_TAXONOMY
            .iter()
            .map(|(label, values)| {
                (
                    label.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Values for `label`, if the category exists.
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, values)| values.as_slice())
    }

    pub fn contains_key(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Category labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(label, values)| (label.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Which category does `tag` belong to? First match in display order.
    pub fn category_of(&self, tag: &str) -> Option<&str> {
        self.iter()
            .find(|(_, values)| values.iter().any(|value| value == tag))
            .map(|(label, _)| label)
    }

    /// Append a category, or replace its values if it already exists.
    fn insert(&mut self, label: &str, values: Vec<String>) {
        match self.entries.iter_mut().find(|(name, _)| name == label) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((label.to_string(), values)),
        }
    }
}

impl Serialize for FacetCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Build the catalog for `records`: fixed taxonomy plus corpus-derived categories.
///
/// Every record contributes its four values verbatim, blanks included. Any
/// non-empty corpus therefore gets all four corpus categories, and a record
/// with no department shows up as `""` under Department, which is exactly
/// the tag [`filter_by_tags`](super::filter_by_tags) needs to select it.
pub fn build_catalog<'a, I>(records: I) -> FacetCatalog
where
    I: IntoIterator<Item = &'a ProblemStatement>,
{
    let mut themes = BTreeSet::new();
    let mut categories = BTreeSet::new();
    let mut organizations = BTreeSet::new();
    let mut departments = BTreeSet::new();

    for record in records {
        for (set, value) in [
            (&mut themes, &record.theme),
            (&mut categories, &record.category),
            (&mut organizations, &record.organization),
            (&mut departments, &record.department),
        ] {
            set.insert(value.clone());
        }
    }

    let mut catalog = FacetCatalog::fixed();
    for (label, values) in [
        (THEME, themes),
        (CATEGORY, categories),
        (ORGANIZATION, organizations),
        (DEPARTMENT, departments),
    ] {
        if !values.is_empty() {
            catalog.insert(label, values.into_iter().collect());
        }
    }
    catalog
}
