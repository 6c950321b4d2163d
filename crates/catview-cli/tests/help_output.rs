use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn catview() -> Command {
    Command::cargo_bin("catview").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    catview()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search and browse a published product catalog"))
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("meta"))
        .stdout(predicate::str::contains("--catalog"));
}

#[test]
fn test_list_help_shows_filters() {
    catview()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--query"))
        .stdout(predicate::str::contains("--category"));
}

#[test]
fn test_rejects_unknown_format() {
    catview()
        .args(["list", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}
