use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn run_json(args: &[&str]) -> Value {
    let output = Command::cargo_bin("island-scout")
        .expect("binary")
        .args(args)
        .arg("--json")
        .env_remove("GEMINI_API_KEY")
        .output()
        .expect("command run");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

fn island_ids(body: &Value) -> Vec<&str> {
    body["islands"]
        .as_array()
        .expect("islands array")
        .iter()
        .map(|island| island["id"].as_str().expect("id string"))
        .collect()
}

#[test]
fn list_returns_the_whole_catalog_in_order() {
    let body = run_json(&["list"]);

    assert_eq!(body["status"], "idle");
    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["active_filters"], 0);

    let ids = island_ids(&body);
    assert_eq!(body["count"].as_u64().unwrap() as usize, ids.len());
    // Default order is grouped by atoll, starting with South Malé.
    assert_eq!(ids.first(), Some(&"maafushi"));
}

#[test]
fn atoll_filter_narrows_to_the_atoll_block() {
    let body = run_json(&["filter", "--atoll", "vaavu"]);
    assert_eq!(island_ids(&body), vec!["fulidhoo", "thinadhoo"]);
    assert_eq!(body["active_filters"], 1);
}

#[test]
fn accommodation_filter_requires_every_amenity() {
    let body = run_json(&[
        "filter",
        "--atoll",
        "south_male",
        "--accommodation",
        "pool",
        "--accommodation",
        "spa",
    ]);

    // Gulhi has a pool but no spa; only Maafushi offers both.
    assert_eq!(island_ids(&body), vec!["maafushi"]);
}

#[test]
fn marine_filter_is_an_or_across_selected_activities() {
    let body = run_json(&["filter", "--marine", "whale_sharks", "--atoll", "south_ari"]);
    assert_eq!(island_ids(&body), vec!["dhigurah", "dhangethi"]);
}

#[test]
fn feature_flags_constrain_only_when_set() {
    let body = run_json(&["filter", "--floating-bar"]);
    assert_eq!(island_ids(&body), vec!["maafushi", "thulusdhoo"]);
}

#[test]
fn unknown_facet_value_is_rejected() {
    Command::cargo_bin("island-scout")
        .expect("binary")
        .args(["filter", "--atoll", "atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown value 'atlantis'"));
}

#[test]
fn facets_view_reports_reachable_values() {
    let body = run_json(&["facets", "--atoll", "baa"]);

    // No Baa island offers nurse shark snorkeling.
    let marine = body["marine_activities"].as_array().expect("array");
    let labels: Vec<&str> = marine.iter().map(|v| v.as_str().unwrap()).collect();
    assert!(!labels.contains(&"Snorkeling with Nurse Sharks"));
    assert!(labels.contains(&"Manta Ray Snorkeling"));

    // The atoll facet itself is not narrowed by its own selection.
    let atolls = body["atolls"].as_array().expect("array");
    assert!(atolls.len() > 1);
}

#[test]
fn ask_without_credentials_behaves_like_no_matches() {
    let body = run_json(&["ask", "a quiet island with sharks"]);

    assert_eq!(body["status"], "no_matches");
    assert_eq!(body["count"], 0);
    assert_eq!(
        body["error"],
        "We could not find an island. Repeat query."
    );
}
