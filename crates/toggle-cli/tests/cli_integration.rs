//! CLI integration tests for the `toggle` binary.
//!
//! These tests invoke the compiled binary to verify end-to-end behavior.

use std::process::{Command, Output};

fn toggle_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_toggle"));
    cmd.env_remove("TOGGLE_CATALOG").env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "toggle should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn cli_identity_matches_build_profile() {
    let output = toggle_bin().arg("identity").output().expect("run binary");
    let expected = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn cli_eval_with_explicit_identity() {
    let output = toggle_bin()
        .args(["eval", "--enabled-in", "debug", "--identity", "release"])
        .output()
        .expect("run binary");
    assert_eq!(stdout_of(&output), "false");

    let output = toggle_bin()
        .args(["eval", "--enabled-in", "debug,release", "--identity", "release"])
        .output()
        .expect("run binary");
    assert_eq!(stdout_of(&output), "true");
}

#[test]
fn cli_eval_empty_activation_is_off() {
    let output = toggle_bin()
        .args(["eval", "--identity", "debug"])
        .output()
        .expect("run binary");
    assert_eq!(stdout_of(&output), "false");
}

#[test]
fn cli_check_reads_catalog_file() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let catalog = dir.path().join("toggles.json");
    std::fs::write(
        &catalog,
        r#"{"toggles": {"dark_mode": {"enabled_in": ["release"]}}}"#,
    )
    .expect("write catalog");

    let output = toggle_bin()
        .args(["check", "dark_mode", "--identity", "release", "--catalog"])
        .arg(&catalog)
        .output()
        .expect("run binary");
    assert_eq!(stdout_of(&output), "dark_mode: on");
}

#[test]
fn cli_check_catalog_from_env() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let catalog = dir.path().join("toggles.json");
    std::fs::write(&catalog, r#"{"toggles": {"beta": {"enabled_in": []}}}"#)
        .expect("write catalog");

    let output = toggle_bin()
        .env("TOGGLE_CATALOG", &catalog)
        .args(["check", "beta", "--identity", "debug"])
        .output()
        .expect("run binary");
    assert_eq!(stdout_of(&output), "beta: off");
}

#[test]
fn cli_check_unknown_toggle_fails() {
    let output = toggle_bin()
        .args(["check", "does_not_exist"])
        .output()
        .expect("run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown toggle: does_not_exist"),
        "stderr: {stderr}"
    );
}

#[test]
fn cli_list_json_uses_builtin_catalog() {
    let output = toggle_bin()
        .args(["list", "--identity", "debug", "--format", "json"])
        .output()
        .expect("run binary");
    let report: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("valid json");
    assert_eq!(report["identity"], "debug");
    assert_eq!(report["toggles"]["show_work_in_progress"], true);
}

#[test]
fn cli_list_text_with_missing_catalog_fails() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let output = toggle_bin()
        .args(["list", "--catalog"])
        .arg(dir.path().join("absent.json"))
        .output()
        .expect("run binary");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load toggle catalog"));
}
