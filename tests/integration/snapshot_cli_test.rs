//! CLI output snapshot tests
//!
//! Pins the exact bytes of the documented examples.

use std::process::Command;

/// Helper to run escolor and capture output
fn run_escolor(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_escolor"))
        .args(args)
        .output()
        .expect("Failed to execute escolor");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Textual output is safe to snapshot inline; escape mode is shown re-escaped.
fn snapshot_text(args: &[&str]) -> String {
    let (stdout, stderr, exit_code) = run_escolor(args);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    stdout.replace('\x1b', "<ESC>").trim_end().to_string()
}

// ============================================================================
// Documented examples
// ============================================================================

#[test]
fn snapshot_background_before_foreground() {
    insta::assert_snapshot!(snapshot_text(&["-gc", "RED", "BLUE"]), @r"\x1b[41;34m");
}

#[test]
fn snapshot_words_of_different_colors() {
    insta::assert_snapshot!(
        snapshot_text(&["-ecg", "RED", "BLUE", "HELLO", "-r", " ", "-cg", "CYAN", "MAGENTA", "WORLD"]),
        @"<ESC>[31;44mHELLO<ESC>[0m <ESC>[36;45mWORLD<ESC>[m"
    );
}

#[test]
fn snapshot_styles_and_resets() {
    insta::assert_snapshot!(
        snapshot_text(&["-bi", "X", "-BIdo", "Y", "-UO", "-tks", "Z", "-TKS"]),
        @r"\x1b[1;3mX\x1b[22;23;21;53mY\x1b[24;55;9;5;7mZ\x1b[29;25;27m"
    );
}

#[test]
fn snapshot_indexed_colors() {
    insta::assert_snapshot!(
        snapshot_text(&["-c", "208", "-g", "0", "warm", "-CG"]),
        @r"\x1b[38;5;208;48;5;0mwarm\x1b[39;49m"
    );
}

#[test]
fn snapshot_invalid_color_diagnostic() {
    let (stdout, stderr, exit_code) = run_escolor(&["-c", "256,0,0"]);
    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    insta::assert_snapshot!(
        stderr.trim_end(),
        @"escolor: Invalid color given: '256,0,0'. See usage with -h or --help."
    );
}
