//! Tag selection: any tag, any field, exact match.

use crate::common::{assert_same_records, ids, sample_store, tags};
use sihsearch::{filter_by_tags, ProblemStatement};
use std::collections::HashSet;

#[test]
fn empty_selection_is_identity() {
    let store = sample_store();
    let all: Vec<&ProblemStatement> = store.iter().collect();
    assert_same_records(&filter_by_tags(&store, &HashSet::new()), &all);
}

#[test]
fn list_fields_match_by_membership() {
    let store = sample_store();
    assert_eq!(ids(&filter_by_tags(&store, &tags(&["Farmers"]))), vec!["SIH1502"]);
    assert_eq!(
        ids(&filter_by_tags(&store, &tags(&["Citizens"]))),
        vec!["SIH1501", "SIH1504", "SIH1505", "SIH1508"]
    );
    assert_eq!(
        ids(&filter_by_tags(&store, &tags(&["Satellite Data"]))),
        vec!["SIH1503"]
    );
}

#[test]
fn scalar_and_mixed_shape_fields_match_by_equality() {
    let store = sample_store();
    // "Med" is a bare string on every record that has it.
    assert_eq!(
        ids(&filter_by_tags(&store, &tags(&["Med"]))),
        vec!["SIH1501", "SIH1505", "SIH1508"]
    );
    // "Hard" appears both as a string and as a one-element list.
    assert_eq!(
        ids(&filter_by_tags(&store, &tags(&["Hard"]))),
        vec!["SIH1502", "SIH1503", "SIH1506"]
    );
    assert_eq!(
        ids(&filter_by_tags(&store, &tags(&["Mobile Solutions"]))),
        vec!["SIH1502"]
    );
    assert_eq!(ids(&filter_by_tags(&store, &tags(&["Hardware"]))), vec!["SIH1506"]);
    assert_eq!(
        ids(&filter_by_tags(&store, &tags(&["Ministry of Culture"]))),
        vec!["SIH1507"]
    );
}

#[test]
fn tags_combine_with_or() {
    let store = sample_store();
    let kept = filter_by_tags(&store, &tags(&["Farmers", "Blockchain", "Robotics"]));
    assert_eq!(ids(&kept), vec!["SIH1502", "SIH1505", "SIH1506"]);
}

#[test]
fn matching_is_exact() {
    let store = sample_store();
    for tag in ["farmers", "Farmer", "Farmers ", "Medium", "Software Solutions"] {
        assert!(
            filter_by_tags(&store, &tags(&[tag])).is_empty(),
            "{tag:?} should not match"
        );
    }
}

#[test]
fn unused_taxonomy_values_narrow_to_nothing() {
    let store = sample_store();
    assert!(filter_by_tags(&store, &tags(&["Military / Defense"])).is_empty());
}

#[test]
fn filtering_twice_changes_nothing() {
    let store = sample_store();
    let selection = tags(&["Citizens", "Hard"]);
    let once = filter_by_tags(&store, &selection);
    let twice = filter_by_tags(once.iter().copied(), &selection);
    assert_same_records(&twice, &once);
}
