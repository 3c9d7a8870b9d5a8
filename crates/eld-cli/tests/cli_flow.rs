//! End-to-end tests for the duty-log flows.
//!
//! Drives the built binary the way a user would: render a day's grid,
//! apply manual paint edits, and observe the recomputed aggregates.

use std::process::Command;

use tempfile::TempDir;

fn eld_binary() -> String {
    env!("CARGO_BIN_EXE_eld").to_string()
}

#[test]
fn grid_renders_a_day_from_aggregates() {
    let output = Command::new(eld_binary())
        .args(["grid", "--drive", "8", "--on-duty", "10", "--rest", "10"])
        .output()
        .expect("failed to run eld grid");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Day 1: drive 8h, on duty 10h, rest 10h"));
    assert!(stdout.contains(
        "Driving                 #  #  #  #  #  #  #  #  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .      8"
    ));
}

#[test]
fn edit_recomputes_aggregates_after_painting() {
    let output = Command::new(eld_binary())
        .args([
            "edit", "--drive", "8", "--on-duty", "10", "--rest", "10", "--paint", "5=sleeper",
        ])
        .output()
        .expect("failed to run eld edit");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("before: drive 8h, on duty 10h, rest 10h"));
    assert!(stdout.contains("after:  drive 7h, on duty 9h, rest 11h"));
    assert!(stdout.contains("slots changed: 1"));
}

#[test]
fn edit_emits_json_when_asked() {
    let output = Command::new(eld_binary())
        .args([
            "edit", "--drive", "8", "--on-duty", "10", "--rest", "10", "--paint",
            "14-17=driving", "--json",
        ])
        .output()
        .expect("failed to run eld edit");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["after"]["drive"], 12.0);
    assert_eq!(value["slots_changed"], 4);
    assert_eq!(value["timeline"].as_array().unwrap().len(), 24);
}

#[test]
fn edit_rejects_a_malformed_paint_spec() {
    let output = Command::new(eld_binary())
        .args([
            "edit", "--drive", "8", "--on-duty", "10", "--rest", "10", "--paint", "nonsense",
        ])
        .output()
        .expect("failed to run eld edit");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid paint spec"));
}

#[test]
fn plan_requires_an_api_key() {
    let temp = TempDir::new().unwrap();
    let output = Command::new(eld_binary())
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .env_remove("ELD_API_KEY")
        .args(["plan", "--pickup", "Chicago, IL", "--dropoff", "Indianapolis, IN"])
        .output()
        .expect("failed to run eld plan");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no API key configured"));
}
