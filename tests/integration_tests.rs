use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("inertial mouse-wheel scrolling"))
        .stdout(predicate::str::contains("--no-smooth"))
        .stdout(predicate::str::contains("--no-views"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("glide"));
}

#[test]
fn test_cli_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("definitely-not-here.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_cli_with_directory_fails() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!().arg(dir.path()).assert().failure();
}

#[test]
fn test_cli_rejects_unknown_flag() {
    cargo_bin_cmd!()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}
