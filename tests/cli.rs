use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("nearest-library").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("LATITUDE"))
        .stdout(predicate::str::contains("LONGITUDE"));
}

#[test]
fn non_numeric_latitude_is_rejected() {
    let mut cmd = Command::cargo_bin("nearest-library").unwrap();
    cmd.args(["north", "-87.77"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn missing_longitude_is_rejected() {
    let mut cmd = Command::cargo_bin("nearest-library").unwrap();
    cmd.arg("41.95");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("LONGITUDE"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn lookup_online_austin_irving() {
    let mut cmd = Command::cargo_bin("nearest-library").unwrap();
    cmd.args(["41.95", "-87.77"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("\"Austin-Irving"));
}
