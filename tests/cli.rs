//! End-to-end checks for the outset binary against a temporary data dir.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn outset(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("outset").unwrap();
    cmd.env("OUTSET_DATA_DIR", temp.path());
    cmd
}

#[test]
fn config_prints_resolved_paths() {
    let temp = TempDir::new().unwrap();

    outset(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Outset configuration"))
        .stdout(predicate::str::contains(temp.path().to_str().unwrap()))
        .stdout(predicate::str::contains("Setup completed: false"));
}

#[test]
fn plan_show_reports_missing_plan() {
    let temp = TempDir::new().unwrap();

    outset(&temp)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget plan found"));
}

#[test]
fn init_marks_setup_complete() {
    let temp = TempDir::new().unwrap();

    outset(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(temp.path().join("config.json").exists());

    outset(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup completed: true"));

    // With setup complete, the bare command no longer launches the wizard
    outset(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("already set up"));
}
