//! Integration tests for the `ledbar` binary.
//!
//! These tests exercise the CLI binary via `assert_cmd`, verifying that
//! subcommands produce the expected frames and level lines. Each test
//! points the config lookup at an empty temp directory so the built-in
//! defaults apply.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cli(home: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("ledbar");
    cmd.env("XDG_CONFIG_HOME", home.path());
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn cli_help_succeeds() {
    let home = tempfile::tempdir().unwrap();
    cli(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ledbar"));
}

#[test]
fn cli_version_prints_version() {
    let home = tempfile::tempdir().unwrap();
    cli(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── config subcommand ──

#[test]
fn cli_config_succeeds() {
    let home = tempfile::tempdir().unwrap();
    cli(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("I2C address"));
}

#[test]
fn cli_config_json_produces_valid_json() {
    let home = tempfile::tempdir().unwrap();
    let output = cli(&home)
        .args(["--json", "config"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("config --json should produce valid JSON");
    assert!(
        json["settings"].is_object(),
        "JSON output should contain 'settings' object"
    );
    assert!(
        json["config_file"].is_string() || json["config_file"].is_null(),
        "config_file should be string or null"
    );
    assert_eq!(json["settings"]["i2c_address"], 0x10);
}

// ── Frame-producing subcommands ──

#[test]
fn cli_off_emits_all_off_frame() {
    let home = tempfile::tempdir().unwrap();
    cli(&home)
        .arg("off")
        .assert()
        .success()
        .stdout(predicate::str::contains("20"))
        .stdout(predicate::str::contains("0000000000000000"));
}

#[test]
fn cli_set_emits_scaled_rgb_frame() {
    let home = tempfile::tempdir().unwrap();
    // LED 3 → slot 12 → opcode 0x4C; red 255 scales to 60 (0x3C).
    cli(&home)
        .args(["set", "3", "red"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4C 3C 00 00"))
        .stdout(predicate::str::contains("0005000000000000"));
}

#[test]
fn cli_set_out_of_range_fails() {
    let home = tempfile::tempdir().unwrap();
    cli(&home)
        .args(["set", "16", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn cli_set_rejects_bad_color() {
    let home = tempfile::tempdir().unwrap();
    cli(&home)
        .args(["set", "0", "#12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Color error"));
}

#[test]
fn cli_all_emits_sixteen_frames() {
    let home = tempfile::tempdir().unwrap();
    cli(&home)
        .args(["all", "blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frames   16"))
        .stdout(predicate::str::contains("5555555555555555"));
}

#[test]
fn cli_ramp_emits_timed_frame_and_no_levels() {
    let home = tempfile::tempdir().unwrap();
    // LED 0 → slot 15 → opcode 0x5F; 2.55 s → 255 (0xFF).
    cli(&home)
        .args(["ramp", "0", "2.55", "red"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5F FF 3C 00 00"))
        .stdout(predicate::str::contains("0000000000000000"));
}

#[test]
fn cli_progress_top_fills_high_half() {
    let home = tempfile::tempdir().unwrap();
    // Default color is white; half fill from the top lights LEDs 8..16.
    cli(&home)
        .args(["progress", "0.5", "--style", "top"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00000000ffffffff"));
}

#[test]
fn cli_progress_clamps_overrange_value() {
    let home = tempfile::tempdir().unwrap();
    cli(&home)
        .args(["progress", "1.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ffffffffffffffff"));
}

#[test]
fn cli_pattern_lights_masked_leds() {
    let home = tempfile::tempdir().unwrap();
    cli(&home)
        .args(["pattern", "101", "--color", "red"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5050000000000000"));
}

#[test]
fn cli_pattern_rejects_bad_mask() {
    let home = tempfile::tempdir().unwrap();
    cli(&home)
        .args(["pattern", "10x1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character"));
}

// ── watch tested via --help: it runs until Ctrl+C ──

#[test]
fn cli_watch_help_succeeds() {
    let home = tempfile::tempdir().unwrap();
    cli(&home)
        .args(["watch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("interval"));
}
