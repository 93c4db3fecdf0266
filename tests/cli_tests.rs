//! End-to-end test of the simulation binary
//!
//! Runs the driver for a few ticks and checks the rendered status lines.

use std::process::Command;

#[test]
fn test_status_lines_rendered_per_tick() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "--ticks",
            "3",
            "--delay-ms",
            "0",
            "--lane",
            "NS:through",
        ])
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute simulation");

    assert!(
        output.status.success(),
        "Simulation failed to run. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "expected one status line per tick");

    // Default through timing is green 10s; the first tick turns the idle
    // red light green.
    assert_eq!(lines[0], "[00:00]: NS through lanes: GREEN (10s)");
    assert_eq!(lines[1], "[00:01]: NS through lanes: GREEN (9s)");
    assert_eq!(lines[2], "[00:02]: NS through lanes: GREEN (8s)");
}

#[test]
fn test_multiple_lanes_rendered_in_descending_order() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "--ticks",
            "1",
            "--delay-ms",
            "0",
            "--lane",
            "EW:left-turn",
            "--lane",
            "NS:through",
        ])
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute simulation");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().next().unwrap(),
        "[00:00]: NS through lanes: GREEN (10s), EW Left-turn: RED (0s)"
    );
}

#[test]
fn test_duplicate_lane_flag_is_an_error() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "--ticks",
            "1",
            "--delay-ms",
            "0",
            "--lane",
            "NS:through",
            "--lane",
            "NS:through",
        ])
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute simulation");

    assert!(!output.status.success(), "duplicate lanes must be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("already registered"),
        "missing duplicate-lane error. stderr: {}",
        stderr
    );
}

#[test]
fn test_invalid_lane_spec_is_an_error() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "--ticks",
            "1",
            "--delay-ms",
            "0",
            "--lane",
            "NW:sideways",
        ])
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute simulation");

    assert!(!output.status.success(), "bad lane spec must be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown direction"),
        "missing parse error. stderr: {}",
        stderr
    );
}
