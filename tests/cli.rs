use assert_fs::TempDir;
use predicates::prelude::*;
use predicates::str::contains;

mod common;
use common::gitrig_cmd;

#[test]
fn test_help_exits_zero_and_lists_flags() {
    let temp = TempDir::new().unwrap();
    gitrig_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            contains("--reset")
                .and(contains("--check-only"))
                .and(contains("--quiet"))
                .and(contains("--dry-run")),
        );
}

#[test]
fn test_short_help_exits_zero() {
    let temp = TempDir::new().unwrap();
    gitrig_cmd(&temp).arg("-h").assert().success();
}

#[test]
fn test_version_exits_zero() {
    let temp = TempDir::new().unwrap();
    gitrig_cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("gitrig"));
}

#[test]
fn test_unknown_flag_exits_one_and_names_the_token() {
    let temp = TempDir::new().unwrap();
    gitrig_cmd(&temp)
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(contains("--bogus").and(contains("Usage")));
}

#[test]
fn test_unknown_flag_makes_no_writes() {
    let temp = TempDir::new().unwrap();
    gitrig_cmd(&temp).arg("--frobnicate").assert().code(1);
    assert!(!temp.path().join("gitconfig").exists());
}

#[test]
fn test_flags_are_order_independent() {
    let temp = TempDir::new().unwrap();
    gitrig_cmd(&temp)
        .args(["--quiet", "--check-only"])
        .assert()
        .success();
    gitrig_cmd(&temp)
        .args(["--check-only", "--quiet"])
        .assert()
        .success();
}
