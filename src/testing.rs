//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{FacetValue, ProblemStatement};

/// Create a record with just an id and a title; every other field empty.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(id: &str, title: &str) -> ProblemStatement {
    ProblemStatement {
        id: id.to_string(),
        title: title.to_string(),
        ..Default::default()
    }
}

/// Create a record with a technology list and a submission count.
pub fn make_tech_record(
    id: &str,
    title: &str,
    technology: &[&str],
    submission_count: Option<u32>,
) -> ProblemStatement {
    ProblemStatement {
        technology: technology.iter().map(|t| t.to_string()).collect(),
        submission_count,
        ..make_record(id, title)
    }
}

/// Create a fully populated record, useful for catalog and filter tests.
pub fn make_full_record(id: &str, theme: &str, organization: &str, difficulty: &str) -> ProblemStatement {
    ProblemStatement {
        summary: format!("Summary for {}", id),
        description: format!("Description for {}", id),
        difficulty: FacetValue::from(difficulty),
        solution_type: FacetValue::from("Web Solutions"),
        organization: organization.to_string(),
        department: format!("Department of {}", theme),
        category: "Software".to_string(),
        theme: theme.to_string(),
        ..make_record(id, &format!("Problem {}", id))
    }
}

/// The two-record corpus used by the scenario tests.
pub fn scenario_records() -> Vec<ProblemStatement> {
    vec![
        make_tech_record(
            "SIH001",
            "Smart Water Leak Detection",
            &["IoT (Internet of Things)"],
            Some(40),
        ),
        make_tech_record(
            "SIH002",
            "AI Crop Disease Detector",
            &["Machine Learning (ML)"],
            Some(5),
        ),
    ]
}
