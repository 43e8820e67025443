//! Integration tests for the apexmap CLI
//!
//! These drive the binary end-to-end against the demo corpus.

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .current_dir(".")
        .output()
        .expect("failed to execute apexmap")
}

#[test]
fn test_cli_invocation() {
    let output = run(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("apexmap"));
    assert!(stdout.contains("Topic-graph navigator"));
}

#[test]
fn test_validate_demo_corpus() {
    let output = run(&["--manifest", "demos/apex/manifest.json", "validate"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("5 topics"));
}

#[test]
fn test_path_lists_prerequisites_first() {
    let output = run(&["--manifest", "demos/apex/manifest.json", "path", "apex dml"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("apex core concepts"));
    assert!(lines[1].contains("apex data types"));
    assert!(lines[2].contains("apex dml"));
}

#[test]
fn test_list_filters_by_difficulty() {
    let output = run(&[
        "--manifest",
        "demos/apex/manifest.json",
        "list",
        "--difficulty",
        "beginner",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("apex core concepts"));
    assert!(lines[1].contains("apex data types"));
}

#[test]
fn test_doc_prints_body_verbatim() {
    let output = run(&["--manifest", "demos/apex/manifest.json", "doc", "batch"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Batch Apex"));
}

#[test]
fn test_validate_rejects_dangling_reference() {
    let dir = tempfile::TempDir::new().unwrap();
    let manifest = dir.path().join("manifest.json");
    std::fs::write(
        &manifest,
        r#"{
  "name": "broken",
  "description": "manifest with a dangling edge",
  "version": "0.0.1",
  "default_doc": "topics/a.md",
  "totalSnippets": 0,
  "topics": [
    {
      "name": "a",
      "file": "topics/a.md",
      "prerequisites": ["missing"],
      "difficulty": "beginner"
    }
  ]
}"#,
    )
    .unwrap();

    let manifest = manifest.to_string_lossy().into_owned();
    let output = run(&["--manifest", &manifest, "validate"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown topic"));
}

#[test]
fn test_unknown_topic_exits_nonzero() {
    let output = run(&["--manifest", "demos/apex/manifest.json", "show", "nonexistent"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nonexistent"));
}
