mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use assignmentctl::bootstrap::CLASS_FILE;
use assignmentctl::config;

fn assignmentctl() -> Command {
    Command::cargo_bin("assignmentctl").expect("binary exists")
}

#[test]
fn help_lists_subcommands() {
    assignmentctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("bootstrap")
                .and(predicate::str::contains("generate"))
                .and(predicate::str::contains("build"))
                .and(predicate::str::contains("compile"))
                .and(predicate::str::contains("release")),
        );
}

#[test]
fn generate_refuses_unbootstrapped_directory() {
    let tmp = tempfile::tempdir().unwrap();
    assignmentctl()
        .current_dir(tmp.path())
        .args(["--noninteractive", "generate", "1", "--due", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not bootstrapped"));
}

#[test]
fn build_refuses_unbootstrapped_directory() {
    let tmp = tempfile::tempdir().unwrap();
    assignmentctl()
        .current_dir(tmp.path())
        .args(["build", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not bootstrapped"));
}

#[test]
fn bootstrap_writes_config_and_rejects_second_run() {
    let tmp = tempfile::tempdir().unwrap();
    // a present class file skips the network fetch
    fs::write(tmp.path().join(CLASS_FILE), "% assignments class\n").unwrap();

    assignmentctl()
        .current_dir(tmp.path())
        .args([
            "--noninteractive",
            "bootstrap",
            "--course",
            "Analysis II",
            "--group",
            "Gruppe 7",
            "--member",
            "Max Mustermann,123456",
            "--member",
            "Erika Musterfrau,789012",
        ])
        .assert()
        .success();

    let raw = fs::read_to_string(config::config_path(tmp.path())).unwrap();
    assert!(raw.contains("Analysis II"));
    assert!(raw.contains("123456"));
    assert!(raw.contains("789012"));
    assert!(raw.contains("number = 0"));

    assignmentctl()
        .current_dir(tmp.path())
        .args(["--noninteractive", "bootstrap", "--course", "Analysis II"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn bootstrap_noninteractive_requires_course() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join(CLASS_FILE), "% assignments class\n").unwrap();

    assignmentctl()
        .current_dir(tmp.path())
        .args(["--noninteractive", "bootstrap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--course"));
}

#[test]
fn generate_then_generate_again_uses_next_number() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_config(tmp.path(), Some(0));

    assignmentctl()
        .current_dir(tmp.path())
        .args(["--noninteractive", "generate", "--due", "April 20, 2021"])
        .assert()
        .success();
    assignmentctl()
        .current_dir(tmp.path())
        .args(["--noninteractive", "generate", "--due", "April 27, 2021"])
        .assert()
        .success();

    assert!(tmp.path().join("assignment-01").is_dir());
    assert!(tmp.path().join("assignment-02").is_dir());
}
