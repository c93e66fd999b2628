//! Integration tests for the `paths` command line

use std::process::Command;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/haunted_house.paths");

fn paths() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_paths"));
    command.env_remove("PATHS_STRICT");
    command
}

#[test]
fn check_accepts_fixture() {
    let output = paths().args(["check", FIXTURE]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Haunted House: 4 passage(s), opening passage 'Beginnings'"));
    assert!(stdout.contains("0 error(s)"));
}

#[test]
fn fmt_prints_canonical_file() {
    let output = paths().args(["fmt", FIXTURE]).output().unwrap();
    assert!(output.status.success());

    let expected = std::fs::read_to_string(FIXTURE).unwrap();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn check_reports_missing_file() {
    let output = paths()
        .args(["check", "no/such/story.paths"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Check failed"));
}

#[test]
fn unknown_command_fails() {
    let output = paths().arg("dance").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("Unknown command 'dance'"));
}

#[test]
fn help_succeeds() {
    let output = paths().arg("--help").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("USAGE:"));
}
