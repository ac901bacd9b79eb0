//! CLI Integration Tests
//!
//! Tests the command-line interface end-to-end. Only confirmation-gated and
//! suggest-terminated paths are exercised here so no backend is required;
//! handler dispatch is covered by the runner's unit tests.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get the binary to test.
fn remedy() -> Command {
    Command::cargo_bin("aether-remedy").unwrap()
}

// ============================================================================
// Help & Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    remedy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Automated remediation playbooks"));
}

#[test]
fn test_version_flag() {
    remedy()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_builtin_playbooks() {
    remedy()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("node_recovery"))
        .stdout(predicate::str::contains("playback_stuck"))
        .stdout(predicate::str::contains("service_restart"));
}

#[test]
fn test_list_json_format() {
    remedy()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"trigger\": \"node_offline\""));
}

#[test]
fn test_list_merges_playbook_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("fog_check.yaml"),
        "id: fog_check\ntrigger: fog_low\nsteps:\n  - action: get_status\n",
    )
    .unwrap();

    remedy()
        .args(["list", "--playbook-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fog_check"))
        .stdout(predicate::str::contains("node_recovery"));
}

#[test]
fn test_list_missing_playbook_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("typo");

    remedy()
        .args(["list", "--playbook-dir"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read playbook directory"));
}

#[test]
fn test_list_rejects_duplicate_playbook_id() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("clash.yaml"),
        "id: node_recovery\ntrigger: t\nsteps:\n  - action: get_status\n",
    )
    .unwrap();

    remedy()
        .args(["list", "--playbook-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate playbook id"));
}

// ============================================================================
// Run Command Tests
// ============================================================================

#[test]
fn test_run_unknown_playbook_fails() {
    remedy()
        .args(["run", "does_not_exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown playbook: does_not_exist"));
}

#[test]
fn test_run_gated_playbook_needs_confirm() {
    remedy()
        .args(["run", "service_restart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"needs_confirm\""))
        .stdout(predicate::str::contains("\"resume_index\": 0"));
}

#[test]
fn test_run_gated_playbook_confirmed_returns_suggestion() {
    remedy()
        .args(["run", "service_restart", "--confirmed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"suggestion\""))
        .stdout(predicate::str::contains("Service appears down. Restart?"));
}

#[test]
fn test_run_suggest_only_custom_playbook() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("advice.yaml"),
        concat!(
            "id: advice\n",
            "trigger: anything\n",
            "steps:\n",
            "  - action: suggest\n",
            "    message: \"Power-cycle the rig.\"\n",
        ),
    )
    .unwrap();

    remedy()
        .args(["run", "advice", "--playbook-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Power-cycle the rig."));
}
