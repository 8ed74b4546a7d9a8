// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records everything else operates on.
//!
//! A `ProblemStatement` is loaded once from the corpus and never mutated. The
//! pipeline passes `&ProblemStatement` around; nothing downstream owns or
//! copies records, so "returns the input unchanged" really means the same
//! references in the same order.
//!
//! # Invariants
//!
//! - `id` is unique across the corpus (the store warns, it does not reject).
//! - Tag lists carry no duplicates in a well-formed corpus. Nothing here
//!   dedups them, so callers must not rely on it.
//! - `difficulty` and `solution_type` are read only through [`FacetValue`]'s
//!   methods. Legacy records carry either a string or a list; both are valid.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A categorical field that may be a single value or a small set of values.
///
/// Older corpus files carry `"difficulty": "Hard"`, newer ones
/// `"difficulty": ["Hard"]`. Both deserialize; read sites never branch on the
/// variant and instead go through [`values`](Self::values),
/// [`primary`](Self::primary), [`contains`](Self::contains) or
/// [`joined`](Self::joined).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FacetValue {
    /// All values. A single value is a one-element set.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            FacetValue::Single(value) => std::slice::from_ref(value),
            FacetValue::Multiple(values) => values,
        };
        slice.iter().map(String::as_str)
    }

    /// The first value, for places that need exactly one category.
    pub fn primary(&self) -> Option<&str> {
        self.values().next()
    }

    /// Does any value equal `tag` exactly?
    pub fn contains(&self, tag: &str) -> bool {
        self.values().any(|value| value == tag)
    }

    /// Values joined by single spaces (the haystack form).
    pub fn joined(&self) -> String {
        self.values().collect::<Vec<_>>().join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.values().all(str::is_empty)
    }
}

impl Default for FacetValue {
    fn default() -> Self {
        FacetValue::Multiple(Vec::new())
    }
}

/// Reads an absent or `null` facet as the empty value.
fn null_as_empty<'de, D>(deserializer: D) -> Result<FacetValue, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FacetValue>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&str> for FacetValue {
    fn from(value: &str) -> Self {
        FacetValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for FacetValue {
    fn from(values: Vec<String>) -> Self {
        FacetValue::Multiple(values)
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values().collect::<Vec<_>>().join(", "))
    }
}

/// One problem statement from the corpus.
///
/// Field names follow the corpus JSON (`ps_id`, `impact_area`, ...). Any
/// missing field falls back to its empty value so a partially scraped record
/// still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemStatement {
    #[serde(rename = "ps_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub difficulty: FacetValue,
    #[serde(default)]
    pub technology: Vec<String>,
    #[serde(default)]
    pub stakeholders: Vec<String>,
    #[serde(default)]
    pub impact_area: Vec<String>,
    #[serde(default)]
    pub data_resource_type: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub solution_type: FacetValue,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_count: Option<u32>,
}

impl ProblemStatement {
    /// Submission count with "missing" read as zero.
    #[inline]
    pub fn submissions(&self) -> u32 {
        self.submission_count.unwrap_or(0)
    }

    /// Display label for the primary difficulty (`Med` reads as `Medium`).
    pub fn difficulty_label(&self) -> &str {
        match self.difficulty.primary() {
            Some("Med") => "Medium",
            Some(value) => value,
            None => "Unrated",
        }
    }
}

/// A record paired with its relevance score for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredRecord<'a> {
    pub record: &'a ProblemStatement,
    pub score: u32,
}
