//! Binary-level argument and configuration error tests.
//!
//! Happy paths are exercised at the engine level against fake tools; these
//! tests only cover the CLI surface, which must fail fatally (non-zero
//! exit) on a missing, malformed, or incomplete configuration argument.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn init_requires_config_argument() {
    Command::cargo_bin("mirror-init")
        .expect("binary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn update_requires_config_argument() {
    Command::cargo_bin("mirror-update")
        .expect("binary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn init_rejects_malformed_json() {
    Command::cargo_bin("mirror-init")
        .expect("binary")
        .arg("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration argument"));
}

#[test]
fn update_rejects_malformed_json() {
    Command::cargo_bin("mirror-update")
        .expect("binary")
        .arg("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration argument"));
}

#[test]
fn init_rejects_missing_data_directory() {
    Command::cargo_bin("mirror-init")
        .expect("binary")
        .arg(r#"{"storage-file":{}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration argument"));
}

#[test]
fn init_fails_fast_when_supervisor_socket_is_absent() {
    // No supervisor is listening in the test environment; the initializer
    // must abort before touching any external tool.
    Command::cargo_bin("mirror-init")
        .expect("binary")
        .arg(r#"{"storage-file":{"data-directory":"/tmp/mirrorsync-test"}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot reach supervisor"));
}

#[test]
fn binaries_report_version() {
    Command::cargo_bin("mirror-init")
        .expect("binary")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mirror-init"));
    Command::cargo_bin("mirror-update")
        .expect("binary")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mirror-update"));
}
