use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the capgate binary.
#[allow(deprecated)]
fn capgate_cmd() -> Command {
    Command::cargo_bin("capgate").unwrap()
}

#[test]
fn help_works() {
    capgate_cmd().arg("--help").assert().success();
}

#[test]
fn help_names_every_subcommand() {
    capgate_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("show")
                .and(predicate::str::contains("resolve"))
                .and(predicate::str::contains("validate")),
        );
}

#[test]
fn missing_subcommand_fails_with_usage() {
    capgate_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
