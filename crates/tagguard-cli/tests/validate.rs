//! End-to-end CLI integration tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` contains a `tag-rules.yaml` plus either
//! Terraform source files or a plan JSON snapshot. These tests run the CLI
//! against each fixture and verify exit codes and report output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Helper to get a Command for the tagguard binary.
/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn tagguard_cmd() -> Command {
    Command::cargo_bin("tagguard").expect("tagguard binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tagguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

#[test]
fn clean_fixture_passes_with_exit_zero() {
    let fixture = fixtures_dir().join("clean");

    tagguard_cmd()
        .arg("validate")
        .arg(&fixture)
        .arg("--config")
        .arg(fixture.join("tag-rules.yaml"))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("✅ No tag violations found!"));
}

#[test]
fn violations_fixture_fails_with_exit_two() {
    let fixture = fixtures_dir().join("violations");

    tagguard_cmd()
        .arg("validate")
        .arg(&fixture)
        .arg("--config")
        .arg(fixture.join("tag-rules.yaml"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("❌ Found 2 tag violation(s):"))
        .stdout(predicate::str::contains("Line 1: aws_instance.web"))
        .stdout(predicate::str::contains("Missing required tag: Owner"))
        .stdout(predicate::str::contains("Forbidden tag found: Temp"));
}

#[test]
fn summary_flag_appends_per_rule_counts() {
    let fixture = fixtures_dir().join("violations");

    tagguard_cmd()
        .arg("validate")
        .arg(&fixture)
        .arg("--config")
        .arg(fixture.join("tag-rules.yaml"))
        .arg("--summary")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Summary:"))
        .stdout(predicate::str::contains("Total violations: 2"))
        .stdout(predicate::str::contains("global-required-tags: 1"))
        .stdout(predicate::str::contains("no-temp: 1"));
}

#[test]
fn unparseable_file_warns_and_remaining_files_are_validated() {
    let fixture = fixtures_dir().join("parse_error");

    tagguard_cmd()
        .arg("validate")
        .arg(&fixture)
        .arg("--config")
        .arg(fixture.join("tag-rules.yaml"))
        .assert()
        .code(0)
        .stderr(predicate::str::contains("⚠️  Parsing errors encountered:"))
        .stderr(predicate::str::contains("broken.tf"))
        .stdout(predicate::str::contains("✅ No tag violations found!"));
}

#[test]
fn plan_mode_validates_planned_resources() {
    let fixture = fixtures_dir().join("plan");

    tagguard_cmd()
        .arg("validate")
        .arg("--plan")
        .arg(fixture.join("plan.json"))
        .arg("--config")
        .arg(fixture.join("tag-rules.yaml"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("❌ Found 1 tag violation(s):"))
        .stdout(predicate::str::contains("Line 1: aws_instance.web"))
        .stdout(predicate::str::contains("Missing required tag: Owner"));
}

#[test]
fn config_accepts_the_file_alias() {
    let fixture = fixtures_dir().join("clean");

    tagguard_cmd()
        .arg("validate")
        .arg(&fixture)
        .arg("--file")
        .arg(fixture.join("tag-rules.yaml"))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("✅ No tag violations found!"));

    tagguard_cmd()
        .arg("validate")
        .arg(&fixture)
        .arg("-f")
        .arg(fixture.join("tag-rules.yaml"))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("✅ No tag violations found!"));
}

#[test]
fn missing_config_file_is_a_runtime_error() {
    let fixture = fixtures_dir().join("clean");

    tagguard_cmd()
        .arg("validate")
        .arg(&fixture)
        .arg("--config")
        .arg(fixture.join("no-such-rules.yaml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read config file"));
}

#[test]
fn missing_plan_file_is_a_runtime_error() {
    let fixture = fixtures_dir().join("plan");

    tagguard_cmd()
        .arg("validate")
        .arg("--plan")
        .arg(fixture.join("no-such-plan.json"))
        .arg("--config")
        .arg(fixture.join("tag-rules.yaml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read plan file"));
}
