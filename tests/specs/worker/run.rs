//! `bgw run` specs
//!
//! A run reports every percentage in order and finishes with a single done.

use crate::prelude::*;

const FAST: &[&str] = &["run", "--min-ms", "0", "--max-ms", "1", "--seed", "7"];

#[test]
fn run_reports_progress_then_done() {
    let run = Project::empty().bgw().args(FAST).passes();

    let lines = run.stdout_lines();
    assert_eq!(lines.first(), Some(&"progress 0%"));
    assert_eq!(lines[lines.len() - 2], "progress 100%");
    assert_eq!(lines.last(), Some(&"done"));
}

#[test]
fn run_reports_each_percentage_once() {
    let run = Project::empty().bgw().args(FAST).passes();

    let expected: Vec<String> = (0..=100).map(|p| format!("progress {}%", p)).collect();
    let progress: Vec<&str> = run
        .stdout_lines()
        .into_iter()
        .filter(|l| l.starts_with("progress"))
        .collect();
    assert_eq!(progress, expected);
    assert_eq!(run.stdout_lines().iter().filter(|l| **l == "done").count(), 1);
}

#[test]
fn run_json_emits_one_object_per_line() {
    let run = Project::empty()
        .bgw()
        .args(FAST)
        .args(&["--format", "json"])
        .passes();

    let lines = run.stdout_lines();
    assert_eq!(lines.len(), 102);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first, serde_json::json!({"kind": "progress", "value": 0}));

    let last: serde_json::Value = serde_json::from_str(lines[101]).unwrap();
    assert_eq!(last, serde_json::json!({"kind": "done"}));
}

#[test]
fn verbose_logs_go_to_stderr() {
    Project::empty()
        .bgw()
        .args(FAST)
        .args(&["-v"])
        .passes()
        .stdout_lacks("DEBUG")
        .stderr_has("DEBUG");
}
