//! CLI Test Suite
//!
//! Runs the `skill-match recommend` command end to end against request files.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const REQUEST: &str = r#"{
    "user_skills": ["python", "react", "sql"],
    "teams": [
        {"id": 1, "name": "Data", "description": "Pipelines", "required_skills": ["Python", "Go"]},
        {"id": 2, "name": "Web", "description": "Frontend", "required_skills": ["React", "SQL"]},
        {"id": 3, "name": "Quiet", "description": "No listing"},
        {"id": 4, "name": "Infra", "description": "Ops", "required_skills": ["Terraform"]}
    ]
}"#;

fn request_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write request");
    file
}

fn skill_match() -> Command {
    Command::cargo_bin("skill-match").expect("binary should be built")
}

#[test]
fn test_recommend_text_output() {
    let file = request_file(REQUEST);

    skill_match()
        .arg("recommend")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Web (score 2)"))
        .stdout(predicate::str::contains("#2 Data (score 1)"))
        .stdout(predicate::str::contains("Matched: react, sql"))
        .stdout(predicate::str::contains("Quiet").not())
        .stdout(predicate::str::contains("Infra").not());
}

#[test]
fn test_recommend_json_output_matches_api_shape() {
    let file = request_file(REQUEST);

    let output = skill_match()
        .args(["recommend", "--format", "json"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "recommendations": [
                {
                    "id": 2,
                    "name": "Web",
                    "description": "Frontend",
                    "required_skills": ["React", "SQL"],
                    "matched_skills": ["react", "sql"],
                    "score": 2
                },
                {
                    "id": 1,
                    "name": "Data",
                    "description": "Pipelines",
                    "required_skills": ["Python", "Go"],
                    "matched_skills": ["python"],
                    "score": 1
                }
            ]
        })
    );
}

#[test]
fn test_recommend_tsv_output() {
    let file = request_file(REQUEST);

    skill_match()
        .args(["recommend", "-f", "tsv"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "rank\tid\tname\tscore\tmatched_skills\trequired_skills\n",
        ))
        .stdout(predicate::str::contains("1\t2\tWeb\t2\treact,sql\tReact,SQL"));
}

#[test]
fn test_recommend_from_stdin() {
    skill_match()
        .args(["recommend", "-", "--format", "json"])
        .write_stdin(REQUEST)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recommendations\""));
}

#[test]
fn test_recommend_no_matches() {
    let file = request_file(r#"{"user_skills": [], "teams": []}"#);

    skill_match()
        .arg("recommend")
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No matching teams found."));
}

#[test]
fn test_recommend_malformed_team_fails() {
    let file = request_file(
        r#"{"user_skills": ["python"], "teams": [{"id": 1, "description": "d", "required_skills": ["python"]}]}"#,
    );

    skill_match()
        .arg("recommend")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Team at index 0 is missing required field 'name'",
        ));
}

#[test]
fn test_recommend_missing_field_fails() {
    let file = request_file(r#"{"teams": []}"#);

    skill_match()
        .arg("recommend")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field 'user_skills'"));
}
