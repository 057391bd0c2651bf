//! Integration tests for the fleetpkg CLI surface: help, version and the
//! read-only listing commands.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fleetpkg() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fleetpkg"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Config with one root and one sudo server.
fn fleet_config() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "servers:\n  - address: 10.0.0.2\n    user: root\n    secret: toor\n\
         \x20 - address: 10.0.0.3\n    user: ubuntu\n    secret: pw\n",
    )
    .expect("write config");
    let path = path.to_string_lossy().into_owned();
    (dir, path)
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    fleetpkg()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Install packages on managed servers"));
}

#[test]
fn test_cli_help_flag_lists_commands() {
    fleetpkg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("catalog"));
}

#[test]
fn test_install_help_warns_that_output_contains_the_secret() {
    fleetpkg()
        .args(["install", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sudo password"))
        .stdout(predicate::str::contains("secret included"));
}

#[test]
fn test_version_command_shows_version() {
    fleetpkg()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "fleetpkg {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let output = fleetpkg()
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_subcommand_fails() {
    fleetpkg().arg("upgrade-everything").assert().failure();
}

// --- catalog ---

#[test]
fn test_catalog_lists_curated_packages() {
    fleetpkg()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("nginx"))
        .stdout(predicate::str::contains("apt install -y nodejs npm"));
}

#[test]
fn test_catalog_json_has_ten_entries_with_commands() {
    let output = fleetpkg()
        .args(["catalog", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let items = v.as_array().expect("array");
    assert_eq!(items.len(), 10);
    assert!(items.iter().any(|i| i["name"] == "docker"
        && i["command"] == "apt install -y docker.io"));
}

// --- servers ---

#[test]
fn test_servers_lists_privilege_without_secrets() {
    let (_dir, path) = fleet_config();
    fleetpkg()
        .arg("servers")
        .env("FLEETPKG_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("10.0.0.2"))
        .stdout(predicate::str::contains("root, apk"))
        .stdout(predicate::str::contains("sudo, apt"))
        .stdout(predicate::str::contains("toor").not());
}

#[test]
fn test_servers_json_never_contains_secrets() {
    let (_dir, path) = fleet_config();
    let output = fleetpkg()
        .args(["servers", "--json"])
        .env("FLEETPKG_CONFIG", &path)
        .output()
        .expect("run");
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(!text.contains("toor"), "secret leaked: {text}");
    let v: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(v[0]["privilege"], "root");
    assert_eq!(v[1]["privilege"], "sudo");
}

#[test]
fn test_servers_empty_registry_is_not_an_error() {
    let dir = TempDir::new().expect("temp dir");
    fleetpkg()
        .arg("servers")
        .env("FLEETPKG_CONFIG", dir.path().join("missing.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No servers registered"));
}
