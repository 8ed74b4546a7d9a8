//! Loading corpora from disk.

use crate::common::{sample_corpus_path, sample_store};
use sihsearch::{Error, FacetValue, RecordStore};
use std::fs;
use tempfile::TempDir;

#[test]
fn sample_corpus_loads() {
    let store = sample_store();
    assert_eq!(store.len(), 8);
    assert!(!store.is_empty());

    let record = store.get("SIH1502").unwrap();
    assert_eq!(record.difficulty, FacetValue::Multiple(vec!["Hard".to_string()]));
    assert_eq!(record.difficulty_label(), "Hard");
    assert_eq!(store.get("SIH1501").unwrap().difficulty_label(), "Medium");
    assert_eq!(store.get("SIH1508").unwrap().submission_count, None);
}

#[test]
fn load_from_reader_matches_load_from_path() {
    let file = fs::File::open(sample_corpus_path()).unwrap();
    let from_reader = RecordStore::from_reader(file).unwrap();
    assert_eq!(from_reader.records(), sample_store().records());
}

#[test]
fn legacy_and_current_shapes_mix() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.json");
    fs::write(
        &path,
        r#"[
            {"id": "OLD1", "title": "Legacy", "difficulty": "Easy", "solution_type": "Web Solutions"},
            {"ps_id": "NEW1", "title": "Current", "difficulty": ["Easy"], "solution_type": ["Web Solutions"]}
        ]"#,
    )
    .unwrap();

    let store = RecordStore::load(&path).unwrap();
    let old = store.get("OLD1").unwrap();
    let new = store.get("NEW1").unwrap();
    assert_eq!(old.difficulty.primary(), new.difficulty.primary());
    assert_eq!(old.solution_type.primary(), new.solution_type.primary());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"ps_id": "SIH1", "#).unwrap();
    assert!(matches!(RecordStore::load(&path), Err(Error::Parse(_))));
}

#[test]
fn wrong_shape_is_a_parse_error() {
    // An object instead of an array of records.
    let err = RecordStore::from_json_str(r#"{"ps_id": "SIH1"}"#).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    // A record without an id.
    let err = RecordStore::from_json_str(r#"[{"title": "no id"}]"#).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = RecordStore::load(&path).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn duplicate_ids_are_kept_and_first_wins_lookup() {
    let store = RecordStore::from_json_str(
        r#"[{"ps_id": "SIH1", "title": "first"}, {"ps_id": "SIH1", "title": "second"}]"#,
    )
    .unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("SIH1").unwrap().title, "first");
}

#[test]
fn null_facets_do_not_break_the_corpus() {
    let json = r#"[
        {"ps_id": "SIH1", "title": "a", "difficulty": null},
        {"ps_id": "SIH2", "title": "b", "difficulty": "Easy", "solution_type": null}
    ]"#;
    let store = RecordStore::from_json_str(json).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.get("SIH1").unwrap().difficulty.is_empty());
    assert!(store.get("SIH2").unwrap().solution_type.is_empty());
    assert_eq!(store.get("SIH2").unwrap().difficulty_label(), "Easy");
}
