// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record store: the corpus, loaded once and never changed.
//!
//! Construct it at startup (`load`, `from_json_str`, `from_reader` or `new`)
//! and pass `&RecordStore` to whatever needs the corpus. There is no global
//! corpus and no way to mutate one after construction; rebuild the store
//! if the data changes.

use crate::error::{Error, Result};
use crate::facets::range::submission_bounds;
use crate::facets::{build_catalog, FacetCatalog};
use crate::pipeline::SearchRequest;
use crate::types::{ProblemStatement, ScoredRecord};
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Immutable in-memory corpus of problem statements.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ProblemStatement>,
}

impl RecordStore {
    /// Wrap records built in code. Duplicate ids are logged, not rejected.
    pub fn new(records: Vec<ProblemStatement>) -> Self {
        warn_on_duplicate_ids(&records);
        Self { records }
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ProblemStatement> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Parse a JSON array of records from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<ProblemStatement> = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    /// Load a JSON corpus file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&raw)?;
        info!(path = %path.display(), records = store.len(), "loaded corpus");
        Ok(store)
    }

    pub fn records(&self) -> &[ProblemStatement] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProblemStatement> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by exact id.
    pub fn get(&self, id: &str) -> Option<&ProblemStatement> {
        self.records.iter().find(|record| record.id == id)
    }

    /// `(min, max)` submission count over the corpus (missing reads as 0).
    pub fn submission_bounds(&self) -> Option<(u32, u32)> {
        submission_bounds(&self.records)
    }

    /// The facet catalog for this corpus.
    pub fn catalog(&self) -> FacetCatalog {
        build_catalog(&self.records)
    }

    /// Run the full search pipeline over the corpus.
    pub fn run(&self, request: &SearchRequest) -> Vec<&ProblemStatement> {
        request.run(&self.records)
    }

    /// Run the pipeline, keeping each result's ranking score.
    pub fn run_scored(&self, request: &SearchRequest) -> Vec<ScoredRecord<'_>> {
        request.run_scored(&self.records)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a ProblemStatement;
    type IntoIter = std::slice::Iter<'a, ProblemStatement>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn warn_on_duplicate_ids(records: &[ProblemStatement]) {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            warn!(id = %record.id, "duplicate problem statement id");
        }
    }
}
