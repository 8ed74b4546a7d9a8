//! Search, then tags, then range, then sort.

use crate::common::{ids, sample_store};
use sihsearch::{SearchRequest, SortMode};

#[test]
fn default_request_lists_the_corpus_in_order() {
    let store = sample_store();
    let results = store.run(&SearchRequest::default());
    assert_eq!(results.len(), store.len());
    assert_eq!(results[0].id, "SIH1501");
    assert_eq!(results[7].id, "SIH1508");
}

#[test]
fn sort_by_submissions_without_query() {
    let store = sample_store();
    let results = store.run(&SearchRequest::default().sorted_by(SortMode::MostSubmissions));
    assert_eq!(
        ids(&results),
        vec![
            "SIH1504", "SIH1502", "SIH1501", "SIH1503", "SIH1507", "SIH1505", "SIH1506", "SIH1508",
        ]
    );
}

#[test]
fn tags_and_range_narrow_then_sort_reorders() {
    let store = sample_store();
    let request = SearchRequest::default()
        .with_tag("Citizens")
        .with_submissions(50..=200)
        .sorted_by(SortMode::FewestSubmissions);
    assert_eq!(ids(&store.run(&request)), vec!["SIH1505", "SIH1501"]);
}

#[test]
fn query_ranking_survives_relevance_sort() {
    let store = sample_store();
    let request = SearchRequest::new("smart");
    assert_eq!(ids(&store.run(&request)), vec!["SIH1501", "SIH1502", "SIH1504"]);
}

#[test]
fn submission_sort_overrides_relevance() {
    let store = sample_store();
    let request = SearchRequest::new("smart").sorted_by(SortMode::MostSubmissions);
    assert_eq!(ids(&store.run(&request)), vec!["SIH1504", "SIH1502", "SIH1501"]);
}

#[test]
fn range_then_fewest_first() {
    let store = sample_store();
    let request = SearchRequest::new("citizens")
        .with_submissions(0..=150)
        .sorted_by(SortMode::FewestSubmissions);
    assert_eq!(ids(&store.run(&request)), vec!["SIH1508", "SIH1505", "SIH1501"]);
}

#[test]
fn query_and_tags_compose() {
    let store = sample_store();
    let request = SearchRequest::new("ai").with_tags(["Hard", "Easy"]);
    // "ai" ranks SIH1503 > SIH1502 > SIH1501 > SIH1504; the tags drop the Med records.
    assert_eq!(ids(&store.run(&request)), vec!["SIH1503", "SIH1502", "SIH1504"]);
}

#[test]
fn request_round_trips_through_json() {
    let request = SearchRequest::new("flood")
        .with_tag("Hard")
        .with_submissions(10..=500)
        .sorted_by(SortMode::MostSubmissions);
    let json = serde_json::to_string(&request).unwrap();
    let parsed: SearchRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, request);
}
