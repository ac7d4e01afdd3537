//! Integration tests for the `info` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("reflow").unwrap()
}

const DUMP: &str = r#"{"pages": [
  {"width": 612, "height": 792, "blocks": [
    {"x0": 10, "y0": 300, "x1": 100, "y1": 320, "text": "One"},
    {"x0": 10, "y0": 330, "x1": 100, "y1": 350, "text": "Two"}
  ]},
  {"width": 595.5, "height": 842}
]}"#;

#[test]
fn info_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc-42.json");
    std::fs::write(&path, DUMP).unwrap();

    cmd()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("File: doc-42"))
        .stdout(predicate::str::contains("Pages: 2"))
        .stdout(predicate::str::contains("Page 1: 612.00 x 792.00, 2 blocks"))
        .stdout(predicate::str::contains("Page 2: 595.50 x 842.00, 0 blocks"));
}

#[test]
fn info_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc-42.json");
    std::fs::write(&path, DUMP).unwrap();

    let output = cmd()
        .arg("info")
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["file_id"], "doc-42");
    assert_eq!(value["page_count"], 2);
    assert_eq!(value["pages"][0]["blocks"], 2);
    assert_eq!(value["pages"][1]["width"], 595.5);
}

#[test]
fn info_requires_json_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, DUMP).unwrap();

    cmd()
        .arg("info")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a .json block dump"));
}

#[test]
fn info_lists_every_page_of_multi_page_dump() {
    let pages: Vec<String> = (1..=4)
        .map(|n| format!(r#"{{"width": {}, "height": 800}}"#, 100 * n))
        .collect();
    let json = format!(r#"{{"pages": [{}]}}"#, pages.join(","));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.json");
    std::fs::write(&path, json).unwrap();

    cmd()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "File: wide\nPages: 4\n\
             \x20 Page 1: 100.00 x 800.00, 0 blocks\n\
             \x20 Page 2: 200.00 x 800.00, 0 blocks\n\
             \x20 Page 3: 300.00 x 800.00, 0 blocks\n\
             \x20 Page 4: 400.00 x 800.00, 0 blocks\n",
        );
}
