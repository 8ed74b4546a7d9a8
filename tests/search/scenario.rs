//! The two-record walkthrough: search, filter, sort, catalog.

use crate::common::{ids, scenario_records, tags};
use sihsearch::{
    build_catalog, filter_by_tags, search, search_scored, sort_records, ProblemStatement, SortMode,
};

#[test]
fn water_finds_only_the_leak_detector() {
    let records = scenario_records();
    let results = search("water", &records);
    assert_eq!(ids(&results), vec!["SIH001"]);
}

#[test]
fn water_scores_title_plus_catch_all() {
    let records = scenario_records();
    let scored = search_scored("water", &records);
    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].score, 13);
}

#[test]
fn ml_tag_keeps_only_the_crop_detector() {
    let records = scenario_records();
    let kept = filter_by_tags(&records, &tags(&["Machine Learning (ML)"]));
    assert_eq!(ids(&kept), vec!["SIH002"]);
}

#[test]
fn fewest_submissions_first() {
    let records = scenario_records();
    let sorted = sort_records(&records, SortMode::FewestSubmissions);
    assert_eq!(ids(&sorted), vec!["SIH002", "SIH001"]);

    let sorted = sort_records(&records, SortMode::MostSubmissions);
    assert_eq!(ids(&sorted), vec!["SIH001", "SIH002"]);
}

#[test]
fn empty_corpus_catalog_is_the_fixed_taxonomy() {
    let catalog = build_catalog(&Vec::<ProblemStatement>::new());
    let labels: Vec<_> = catalog.labels().collect();
    assert_eq!(
        labels,
        vec![
            "Technology",
            "Difficulty",
            "Stakeholders",
            "Impact Area",
            "Data/Resource Type",
            "Solution Type",
        ]
    );
    assert_eq!(catalog.get("Difficulty").unwrap(), ["Easy", "Med", "Hard"]);
}
