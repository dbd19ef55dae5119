//! Integration tests for `show` and `url`.
//!
//! Responsibilities:
//! - Prove that environment variables reach the rendered configuration.
//! - Prove that passwords are masked unless `--show-secrets` is given.
//! - Prove that missing variables never make the CLI fail.

mod common;

use common::{flyway_cmd, flyway_cmd_with_connection};
use predicates::prelude::*;

#[test]
fn test_url_from_environment() {
    flyway_cmd_with_connection()
        .arg("url")
        .assert()
        .success()
        .stdout("jdbc:postgresql://db.local:5432/app\n");
}

#[test]
fn test_url_with_missing_environment_still_succeeds() {
    flyway_cmd()
        .arg("url")
        .assert()
        .success()
        .stdout("jdbc:postgresql://:/\n");
}

#[test]
fn test_cli_overrides_beat_environment() {
    flyway_cmd_with_connection()
        .args(["--database", "reporting", "url"])
        .assert()
        .success()
        .stdout("jdbc:postgresql://db.local:5432/reporting\n");
}

#[test]
fn test_show_json_shape() {
    let output = flyway_cmd_with_connection()
        .env("FLYWAY_PGSQL_USERNAME", "migrator")
        .args(["show", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["flywayArgs"]["url"],
        "jdbc:postgresql://db.local:5432/app"
    );
    assert_eq!(value["flywayArgs"]["user"], "migrator");
    assert_eq!(value["flywayArgs"]["table"], "flyway_schema_history");
    assert_eq!(value["downloads"]["expirationTimeInMs"], -1);
}

#[test]
fn test_show_masks_password_by_default() {
    flyway_cmd_with_connection()
        .env("FLYWAY_PGSQL_PASSWORD", "supersecret_pw_123")
        .args(["show", "--format", "conf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flyway.password=********"))
        .stdout(predicate::str::contains("supersecret_pw_123").not());
}

#[test]
fn test_show_secrets_reveals_password() {
    flyway_cmd_with_connection()
        .env("FLYWAY_PGSQL_PASSWORD", "supersecret_pw_123")
        .args(["show", "--format", "args", "--show-secrets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-password=supersecret_pw_123"));
}

#[test]
fn test_show_rejects_unknown_format() {
    flyway_cmd()
        .args(["show", "--format", "xml"])
        .assert()
        .failure()
        .code(2);
}
