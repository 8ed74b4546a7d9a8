//! The `sihsearch` binary, driven the way a user would.

use crate::common::{sample_corpus_path, sample_store};
use sihsearch::search_scored;
use std::process::{Command, Output};
use tempfile::TempDir;

fn sihsearch(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sihsearch"))
        .args(args)
        .env("SIHSEARCH_DATA", sample_corpus_path())
        .env("SIHSEARCH_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn search_json_includes_scores() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(&sihsearch(&home, &["search", "water", "--json"]));
    let hits = value.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["ps_id"], "SIH1501");
    assert_eq!(hits[0]["score"], 33);
    assert!(hits[0].get("explain").is_none());
}

#[test]
fn search_with_filters_and_limit() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(&sihsearch(
        &home,
        &["search", "-t", "Citizens", "--sort", "mostSubmissions", "-l", "2", "--json"],
    ));
    let ids: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|hit| hit["ps_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["SIH1504", "SIH1501"]);
}

#[test]
fn printed_scores_are_ranking_scores() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(&sihsearch(
        &home,
        &["search", "ai", "--sort", "fewestSubmissions", "--explain", "--json"],
    ));
    let store = sample_store();
    let ranked = search_scored("ai", store.records());

    let hits = value.as_array().unwrap();
    assert_eq!(hits.len(), ranked.len());
    for hit in hits {
        let id = hit["ps_id"].as_str().unwrap();
        let expected = ranked.iter().find(|entry| entry.record.id == id).unwrap().score;
        assert_eq!(hit["score"], expected);

        let breakdown: u64 = hit["explain"]
            .as_array()
            .unwrap()
            .iter()
            .map(|term| term["score"].as_u64().unwrap())
            .sum();
        assert_eq!(breakdown, u64::from(expected));
    }
}

#[test]
fn explain_lists_each_term() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(&sihsearch(&home, &["search", "leak detection", "--explain", "--json"]));
    let explain = value[0]["explain"].as_array().unwrap();
    assert_eq!(explain.len(), 2);
    assert_eq!(explain[0]["term"], "leak");
    assert_eq!(explain[0]["hits"]["title"], true);
}

#[test]
fn inverted_range_is_rejected() {
    let home = TempDir::new().unwrap();
    let output = sihsearch(&home, &["search", "--min", "50", "--max", "10"]);
    assert!(!output.status.success());
}

#[test]
fn unknown_sort_mode_is_rejected() {
    let home = TempDir::new().unwrap();
    let output = sihsearch(&home, &["search", "--sort", "alphabetical"]);
    assert!(!output.status.success());
}

#[test]
fn facets_json_has_ten_categories() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(&sihsearch(&home, &["facets", "--json"]));
    assert_eq!(value.as_object().unwrap().len(), 10);
}

#[test]
fn show_prints_the_record() {
    let home = TempDir::new().unwrap();
    let output = sihsearch(&home, &["show", "SIH1503"]);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Flood Early Warning"));
    assert!(text.contains("National Disaster Management Authority"));

    let missing = sihsearch(&home, &["show", "SIH0000"]);
    assert!(!missing.status.success());
}

#[test]
fn stats_json() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(&sihsearch(&home, &["stats", "--json"]));
    assert_eq!(value["records"], 8);
    assert_eq!(value["submissions"]["min"], 0);
    assert_eq!(value["submissions"]["max"], 405);
    assert_eq!(value["difficulty"][0], serde_json::json!(["Easy", 2]));
}

#[test]
fn bookmarks_lifecycle() {
    let home = TempDir::new().unwrap();
    assert!(sihsearch(&home, &["bookmarks", "add", "SIH1502"]).status.success());
    assert!(sihsearch(&home, &["bookmarks", "toggle", "SIH1507"]).status.success());

    let value = stdout_json(&sihsearch(&home, &["bookmarks", "list", "--json"]));
    let ids: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["ps_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["SIH1507", "SIH1502"]);

    assert!(sihsearch(&home, &["bookmarks", "remove", "SIH1502"]).status.success());
    let value = stdout_json(&sihsearch(&home, &["bookmarks", "list", "--json"]));
    assert_eq!(value.as_array().unwrap().len(), 1);

    // Unknown ids cannot be bookmarked.
    assert!(!sihsearch(&home, &["bookmarks", "add", "SIH0000"]).status.success());
}
