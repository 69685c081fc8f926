//! End-to-end tests for the `baseball` binary
//!
//! Runs the compiled binary and checks its stdout.

use similar_asserts::assert_eq;
use std::process::{Command, Output};

fn baseball(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_baseball"))
        .args(args)
        .output()
        .expect("Failed to run baseball binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("Invalid UTF-8 in stdout")
}

#[test]
fn test_seeded_play_is_deterministic() {
    let args = ["play", "--seed", "42", "--verbosity", "verbose"];
    let run1 = baseball(&args);
    let run2 = baseball(&args);

    assert!(run1.status.success());
    let out1 = stdout(&run1);
    assert!(out1.contains("=== Play ball! (dice: random) ==="));
    assert!(out1.contains("Game Over!"));
    assert!(out1.contains("wins!"));
    assert_eq!(out1, stdout(&run2));
}

#[test]
fn test_scripted_play_runs_out_of_dice() {
    let output = baseball(&["play", "--dice", "script", "--rolls", "6,6 1,1 1,1 1,1"]);
    assert!(!output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Dice roll: 6 + 6 = 12 -> Home Run (1 scored)"));
    assert!(out.contains("End of Guest's turn"));
    assert!(out.contains("Inning 1, Home batting"));
}

#[test]
fn test_scripted_play_requires_rolls() {
    let output = baseball(&["play", "--dice", "script"]);
    assert!(!output.status.success());
}

#[test]
fn test_json_output() {
    let output = baseball(&["play", "--seed", "3", "--format", "json", "-v", "minimal"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    for line in &lines {
        let value: serde_json::Value = serde_json::from_str(line).expect("each line is JSON");
        assert!(value.is_object());
    }
    let summary: serde_json::Value = serde_json::from_str(lines[lines.len() - 1]).unwrap();
    assert!(summary["result"]["winner"].is_string());
    assert!(summary["line_score"]["guest"].is_array());
}

#[test]
fn test_simulate() {
    let args = ["simulate", "--games", "50", "--seed", "9"];
    let output = baseball(&args);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Games played: 50"));
    assert!(out.contains("Guest wins:"));
    assert!(out.contains("Home wins:"));
    assert_eq!(out, stdout(&baseball(&args)));
}

#[test]
fn test_invalid_verbosity_rejected() {
    let output = baseball(&["play", "--verbosity", "loud"]);
    assert!(!output.status.success());
}
