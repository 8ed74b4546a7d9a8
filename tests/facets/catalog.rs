//! Catalog construction over the sample corpus.

use crate::common::{ids, make_full_record, make_record, sample_store, tags};
use sihsearch::{build_catalog, filter_by_tags};

#[test]
fn fixed_categories_come_first_then_corpus_categories() {
    let catalog = sample_store().catalog();
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
            "Theme",
            "Category",
            "Organization",
            "Department",
        ]
    );
}

#[test]
fn corpus_categories_are_sorted_and_deduplicated() {
    let catalog = sample_store().catalog();
    assert_eq!(catalog.get("Category").unwrap(), ["Hardware", "Software"]);

    let themes = catalog.get("Theme").unwrap();
    assert_eq!(themes.len(), 8);
    assert!(themes.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn blank_department_is_a_selectable_value() {
    // SIH1508 has an empty department.
    let store = sample_store();
    let catalog = store.catalog();
    let departments = catalog.get("Department").unwrap();
    assert_eq!(departments.len(), 8);
    assert_eq!(departments[0], "");

    let kept = filter_by_tags(store.records(), &tags(&[""]));
    assert_eq!(ids(&kept), vec!["SIH1508"]);
}

#[test]
fn corpus_with_only_blank_departments() {
    let mut agri = make_record("SIH1", "Crop yield");
    agri.theme = "Agri".to_string();
    let records = vec![agri, make_record("SIH2", "Untitled")];

    let catalog = build_catalog(&records);
    assert_eq!(catalog.get("Department").unwrap(), [""]);
    assert_eq!(catalog.get("Theme").unwrap(), ["", "Agri"]);

    assert_eq!(filter_by_tags(&records, &tags(&[""])).len(), 2);
}

#[test]
fn fixed_vocabulary_does_not_depend_on_corpus() {
    let records = vec![make_full_record("SIH1", "Space", "ISRO", "Hard")];
    let catalog = build_catalog(&records);
    assert_eq!(catalog.get("Technology").unwrap().len(), 22);
    assert_eq!(catalog.get("Theme").unwrap(), ["Space"]);
    assert_eq!(catalog.category_of("ISRO"), Some("Organization"));
    assert_eq!(catalog.category_of("Hard"), Some("Difficulty"));
}

#[test]
fn serializes_as_ordered_object() {
    let records = vec![make_full_record("SIH1", "Space", "ISRO", "Hard")];
    let json = serde_json::to_string(&build_catalog(&records)).unwrap();
    let technology = json.find("\"Technology\"").unwrap();
    let department = json.find("\"Department\"").unwrap();
    assert!(technology < department);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["Organization"], serde_json::json!(["ISRO"]));
}
