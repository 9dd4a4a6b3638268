//! CLI behavior through the real binary.

use assert_cmd::Command;
use indoc::indoc;
use std::io::Write;
use tempfile::NamedTempFile;

fn spacescore() -> Command {
    Command::cargo_bin("spacescore").unwrap()
}

fn snapshot_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn score_command_renders_terminal_report() {
    let snapshot = snapshot_file(indoc! {r#"
        {
            "name": "Orbital Demo Co",
            "tier": 2,
            "isPublic": false,
            "tags": ["software", "nasa"],
            "foundedYear": 2019,
            "employeeCount": 180,
            "totalFunding": 75000000.0,
            "_count": {"fundingRounds": 2, "products": 3, "contracts": 1, "events": 2}
        }
    "#});

    spacescore()
        .arg("score")
        .arg(snapshot.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Orbital Demo Co"))
        .stdout(predicates::str::contains("Space Score:"))
        .stdout(predicates::str::contains("Innovation"))
        .stdout(predicates::str::contains("Growth Trajectory"));
}

#[test]
fn score_command_verbose_shows_factor_trail() {
    let snapshot = snapshot_file(r#"{"name": "Verbose Co", "tags": ["patent"]}"#);

    spacescore()
        .arg("score")
        .arg(snapshot.path())
        .arg("-v")
        .assert()
        .success()
        .stdout(predicates::str::contains("Patent & IP portfolio"))
        .stdout(predicates::str::contains("Market share"));
}

#[test]
fn score_command_emits_parseable_json() {
    let snapshot = snapshot_file(r#"{"name": "JSON Co", "tier": 1, "isPublic": true}"#);

    let output = spacescore()
        .arg("score")
        .arg(snapshot.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["name"], "JSON Co");
    assert!(payload["score"]["total"].is_u64());
    assert_eq!(payload["score"]["breakdown"].as_array().unwrap().len(), 5);
    assert!(payload["score"]["tier"]["label"].is_string());
}

#[test]
fn score_command_fails_cleanly_on_missing_snapshot() {
    spacescore()
        .arg("score")
        .arg("/nonexistent/company.json")
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to read company snapshot"));
}

#[test]
fn leaderboard_top_limits_output() {
    let output = spacescore()
        .args(["leaderboard", "--top", "3", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let entries: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["slug"], "spacex");
}

#[test]
fn leaderboard_sector_filter_matches_case_insensitively() {
    let output = spacescore()
        .args(["leaderboard", "--sector", "earth observation", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let entries: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = entries.as_array().unwrap();
    assert!(!entries.is_empty());
    for entry in entries {
        assert_eq!(entry["sector"], "Earth Observation");
    }
}

#[test]
fn show_command_displays_reference_entry() {
    spacescore()
        .args(["show", "rocket-lab"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Rocket Lab"))
        .stdout(predicates::str::contains("Space Score:"));
}

#[test]
fn show_command_rejects_unknown_slug() {
    spacescore()
        .args(["show", "not-a-company"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown company slug"));
}

#[test]
fn tiers_command_lists_all_bands() {
    spacescore()
        .arg("tiers")
        .assert()
        .success()
        .stdout(predicates::str::contains("Elite"))
        .stdout(predicates::str::contains("Pre-Revenue"))
        .stdout(predicates::str::contains("900"));
}

#[test]
fn custom_reference_set_changes_percentile() {
    let reference = snapshot_file(indoc! {r#"
        [
            {"slug": "tiny", "name": "Tiny", "sector": "Test", "tier": 3,
             "innovation": 5, "financial": 5, "market": 5, "operations": 5, "growth": 5}
        ]
    "#});
    let snapshot = snapshot_file(r#"{"name": "Big Co", "tier": 1, "isPublic": true}"#);

    let output = spacescore()
        .arg("score")
        .arg(snapshot.path())
        .arg("--reference")
        .arg(reference.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["score"]["percentile"], 100);
}

#[test]
fn invalid_reference_set_is_rejected() {
    let reference = snapshot_file(indoc! {r#"
        [
            {"slug": "dup", "name": "A", "sector": "Test", "tier": 3,
             "innovation": 5, "financial": 5, "market": 5, "operations": 5, "growth": 5},
            {"slug": "dup", "name": "B", "sector": "Test", "tier": 3,
             "innovation": 9, "financial": 9, "market": 9, "operations": 9, "growth": 9}
        ]
    "#});
    let snapshot = snapshot_file(r#"{"name": "Any Co"}"#);

    spacescore()
        .arg("score")
        .arg(snapshot.path())
        .arg("--reference")
        .arg(reference.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("duplicate slug"));
}
