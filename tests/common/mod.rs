//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sihsearch::{ProblemStatement, RecordStore};
use std::collections::HashSet;
use std::path::PathBuf;

// Re-export canonical test utilities from sihsearch::testing
pub use sihsearch::testing::{make_full_record, make_record, make_tech_record, scenario_records};

// ============================================================================
// FIXTURES
// ============================================================================

/// Path to the sample corpus shipped with the crate.
pub fn sample_corpus_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("problems.json")
}

/// The sample corpus, loaded through the public store API.
pub fn sample_store() -> RecordStore {
    RecordStore::load(sample_corpus_path()).expect("sample corpus should load")
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Ids of a result list, in order.
pub fn ids<'a>(records: &[&'a ProblemStatement]) -> Vec<&'a str> {
    records.iter().map(|record| record.id.as_str()).collect()
}

/// Build a tag selection from string literals.
pub fn tags(values: &[&str]) -> HashSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Assert two result lists hold the same records (by address) in the same order.
pub fn assert_same_records(actual: &[&ProblemStatement], expected: &[&ProblemStatement]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            std::ptr::eq(*a, *e),
            "record {} differs: {} vs {}",
            index,
            a.id,
            e.id
        );
    }
}
