// tests/cli_regression.rs
//
// Regression tests for the CLI surface, run against the fixture corpus in
// tests/fixtures/legacy. Requires: assert_cmd, predicates, tempfile in
// [dev-dependencies].

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

const FIXTURES: &str = "tests/fixtures/legacy";

fn protomig() -> Command {
    Command::cargo_bin("protomig").unwrap()
}

#[test]
fn migrate_writes_transformed_units_to_the_out_dir() {
    let out = tempfile::tempdir().unwrap();

    protomig()
        .arg("migrate")
        .arg(FIXTURES)
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success()
        .stderr(contains("==> migrating Arrow2"));

    let arrow = std::fs::read_to_string(out.path().join("Arrow2.js")).unwrap();
    assert!(arrow.starts_with("class Arrow2 extends Base {\n"));
    assert!(arrow.contains("        super(scene);\n"));
    assert!(arrow.contains("    moveTo(target, dt) {\n"));
    assert!(!arrow.contains("APP."));

    let main = std::fs::read_to_string(out.path().join("Main.js")).unwrap();
    assert!(main.starts_with("export const REVISION = '2.4';\n"));
    assert!(main.contains("function util(value) {"));
}

#[test]
fn migrate_without_out_dir_prints_a_dry_run() {
    protomig()
        .arg("migrate")
        .arg(FIXTURES)
        .assert()
        .success()
        .stdout(contains("class Base {").and(contains("export const REVISION = '2.4';")));
}

#[test]
fn report_dumps_the_model_as_json() {
    let assert = protomig().arg("report").arg(FIXTURES).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let model: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(model["symbols"]["Arrow2"]["parent"], "Base");
    assert_eq!(model["symbols"]["Arrow2"]["is_class"], true);
    assert_eq!(model["symbols"]["Arrow2"]["merges_from"][0], "Pickable");
    assert_eq!(model["symbols"]["util"]["is_class"], false);
    let arrow_deps = model["dependencies"]["Arrow2"].as_array().unwrap();
    assert!(arrow_deps.iter().any(|d| d == "Base"));
    assert!(arrow_deps.iter().any(|d| d == "MathUtil"));
}

#[test]
fn foreign_parent_call_removal_is_reported() {
    protomig()
        .arg("migrate")
        .arg(FIXTURES)
        .assert()
        .success()
        .stderr(contains("removing extra parent constructor call to Pickable"));
}

#[test]
fn diff_shows_the_assembled_class_header() {
    protomig()
        .arg("diff")
        .arg(FIXTURES)
        .assert()
        .success()
        .stdout(contains("class Arrow2 extends Base {"));
}

#[test]
fn unreadable_input_aborts_the_run() {
    protomig()
        .arg("migrate")
        .arg("tests/fixtures/no_such_dir")
        .assert()
        .failure()
        .stderr(contains("input unavailable"));
}
