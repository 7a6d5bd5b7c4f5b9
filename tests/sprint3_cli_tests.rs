// Sprint 3: Command-line front end
// Integration tests for input decoding, configuration layering and output formats

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn alternating(len: usize) -> String {
    "10".repeat(len / 2)
}

// ============================================================================
// Demo scenario
// ============================================================================

#[test]
fn test_demo_flags_periodic_traffic() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.arg("--demo");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "chunk 1 (bits 0..40): NORMAL - insufficient data (40/50 bits)",
        ))
        .stdout(predicate::str::contains("chunk 2 (bits 40..80): SUSPICIOUS"));
}

#[test]
fn test_demo_seed_is_configurable() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.args(["--demo", "--seed", "1234"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SUSPICIOUS"));
}

// ============================================================================
// Input handling
// ============================================================================

#[test]
fn test_file_input_periodic_is_suspicious() {
    let tmp_dir = TempDir::new().unwrap();
    let input = tmp_dir.path().join("traffic.txt");
    fs::write(&input, alternating(64)).unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.args(["-n", "16", "-t", "0.5"]).arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chunk 2 (bits 8..16): SUSPICIOUS - L=2"))
        .stdout(predicate::str::contains("polynomial=x^2 + 1"));
}

#[test]
fn test_stdin_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.args(["-n", "4", "-t", "0.9", "--chunk-size", "4", "-"])
        .write_stdin("0001\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "chunk 1 (bits 0..4): NORMAL - L=4 ratio=1.0000",
        ));
}

#[test]
fn test_hex_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.args(["--input-format", "hex", "-n", "16", "--chunk-size", "16"])
        .write_stdin("ffff ffff");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SUSPICIOUS - L=1 ratio=0.0625"));
}

#[test]
fn test_raw_input() {
    let tmp_dir = TempDir::new().unwrap();
    let input = tmp_dir.path().join("capture.bin");
    fs::write(&input, [0u8; 8]).unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.args(["--input-format", "raw", "-n", "64", "--chunk-size", "64"])
        .arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SUSPICIOUS - L=0 ratio=0.0000"));
}

#[test]
fn test_invalid_bit_character_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.write_stdin("0102");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid character"));
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.arg("/nonexistent/traffic.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_invalid_threshold_rejected() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.args(["-t", "1.5", "--demo"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("threshold must be in (0, 1]"));
}

#[test]
fn test_zero_capacity_rejected() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.args(["-n", "0", "--demo"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("capacity must be positive"));
}

#[test]
fn test_config_file_with_flag_override() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("sentinel.toml");
    fs::write(&config, "capacity = 8\nthreshold = 0.1\n").unwrap();

    // From the file alone: 1010 1010 has ratio 0.25 >= 0.1
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.arg("--config").arg(&config).write_stdin(alternating(8));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("NORMAL - L=2 ratio=0.2500"));

    // Flag overrides the file threshold
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.arg("--config")
        .arg(&config)
        .args(["-t", "0.5"])
        .write_stdin(alternating(8));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SUSPICIOUS - L=2 ratio=0.2500"));
}

#[test]
fn test_malformed_config_file_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("broken.toml");
    fs::write(&config, "capacity = [").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.arg("--config").arg(&config).arg("--demo");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_json_output() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.args(["--demo", "--format", "json"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["config"]["capacity"], 50);
    assert_eq!(value["config"]["threshold"], 0.7);
    assert_eq!(value["chunks"][0]["verdict"], "normal");
    assert_eq!(value["chunks"][1]["verdict"], "suspicious");
    assert_eq!(value["stats"]["evaluations"], 1);
    assert_eq!(value["stats"]["suspicious"], 1);
}

#[test]
fn test_log_file_records() {
    let tmp_dir = TempDir::new().unwrap();
    let log = tmp_dir.path().join("sentinel.log");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.arg("--demo").arg("--log-file").arg(&log);
    cmd.assert().success();

    let contents = fs::read_to_string(&log).unwrap();
    let warnings: Vec<_> = contents.lines().filter(|l| l.contains(" - WARNING - ")).collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Low linear complexity detected!"));
    // Below-capacity call only produces a DEBUG record, which the file sink drops
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn test_summary_flag() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.args(["--demo", "--summary"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Linear Complexity Summary"))
        .stderr(predicate::str::contains("Evaluations:     1"));
}

#[test]
fn test_warnings_reach_stderr_via_tracing() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lfsr-sentinel");
    cmd.arg("--demo");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("Low linear complexity detected!"));
}
