//! CLI tests for the `checklist` binary.
//!
//! Spawns the binary with scripted stdin and verifies exit codes and the
//! report artifacts written next to the checklist.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use checklist::core::types::Status;
use checklist::exit_codes;
use checklist::io::report::load_results;
use checklist::test_support::SMOKE_CHECKLIST;

fn run_checklist(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_checklist"))
        .current_dir(dir)
        .args(args)
        .arg("--no-clear")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn checklist");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("checklist output")
}

#[test]
fn smoke_scenario_writes_both_reports() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("FINAL-TESTING-CHECKLIST.md"), SMOKE_CHECKLIST).expect("write");

    let output = run_checklist(
        temp.path(),
        &[],
        "1\n1\n1\n\n2\n2\nButton missing\n\n0\n0\n",
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let markdown = fs::read_to_string(temp.path().join("FINAL-TESTING-CHECKLIST-results.md"))
        .expect("markdown report");
    assert!(markdown.contains("## 1. Smoke Tests"));
    assert!(markdown.contains("1 Passed, ❌ 1 Failed, ⚠️ 0 Warnings, 0 Not Tested"));

    let session = load_results(&temp.path().join("FINAL-TESTING-CHECKLIST-results.json"))
        .expect("json report");
    let items = &session.sections()[0].items;
    assert_eq!(items[0].status, Status::Pass);
    assert_eq!(items[1].status, Status::Fail);
    assert_eq!(items[1].notes.as_deref(), Some("Button missing"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Test results saved. Goodbye!"));
}

#[test]
fn missing_checklist_exits_before_menu() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_checklist(temp.path(), &["NOPE.md"], "");
    assert_eq!(output.status.code(), Some(exit_codes::MISSING_INPUT));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not find NOPE.md"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Select a testing section"));
}

#[test]
fn closed_stdin_still_saves_untested_results() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("QA.md"), SMOKE_CHECKLIST).expect("write");
    let output = run_checklist(temp.path(), &["QA.md"], "");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let session = load_results(&temp.path().join("QA-results.json")).expect("json report");
    assert!(
        session.sections()[0]
            .items
            .iter()
            .all(|item| item.status == Status::NotTested)
    );
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("checklist.toml"), "pairing = \"sideways\"\n").expect("config");
    let output = run_checklist(temp.path(), &[], "");
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn unreadable_checklist_is_reported_interactively() {
    let temp = tempfile::tempdir().expect("tempdir");
    // A directory exists but cannot be read as a file.
    fs::create_dir(temp.path().join("DIR.md")).expect("dir");
    let output = run_checklist(temp.path(), &["DIR.md"], "\n");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error: read checklist"));
    assert!(stdout.contains("Press Enter to exit..."));
}
