//! Unit tests for the install-package application service.
//!
//! Every port is mocked; no process is spawned and no network is touched.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use fleetpkg_cli::application::ports::ServerRegistry;
use fleetpkg_cli::application::services::install::{
    execute_install, install_package, prepare_install,
};
use fleetpkg_cli::domain::report::{FAILURE_MARKER, REPORT_HEADER, SUCCESS_MARKER};
use fleetpkg_cli::domain::{InstallError, InstallMode, InstallRequest, RejectionStatus};

use crate::mocks::{RecordingExecutor, RecordingReporter, Response, StaticRegistry};

fn request(address: &str, mode: &str, selector: &str) -> InstallRequest {
    InstallRequest::parse(address, mode, selector).expect("valid request")
}

// ── Rejections happen before any remote call ──────────────────────────────────

#[tokio::test]
async fn test_install_unknown_server_is_rejected_without_remote_call() {
    let executor = RecordingExecutor::ok("");
    let reporter = RecordingReporter::default();
    let err = install_package(
        &StaticRegistry::mixed(),
        &executor,
        &reporter,
        &request("10.9.9.9", "common", "nginx"),
    )
    .await
    .expect_err("unknown server must be rejected");

    assert_eq!(err, InstallError::ServerNotFound("10.9.9.9".to_string()));
    assert_eq!(err.status(), RejectionStatus::NotFound);
    assert_eq!(executor.call_count(), 0);
    assert!(reporter.events.borrow().is_empty());
}

#[tokio::test]
async fn test_install_unknown_catalog_key_is_rejected_without_remote_call() {
    let executor = RecordingExecutor::ok("");
    let err = install_package(
        &StaticRegistry::mixed(),
        &executor,
        &RecordingReporter::default(),
        &request("10.0.0.2", "common", "emacs"),
    )
    .await
    .expect_err("unknown key must be rejected");

    assert_eq!(err, InstallError::CatalogKeyNotFound("emacs".to_string()));
    assert_eq!(err.status(), RejectionStatus::BadRequest);
    assert_eq!(executor.call_count(), 0);
}

#[tokio::test]
async fn test_install_custom_name_of_only_metacharacters_is_rejected() {
    let executor = RecordingExecutor::ok("");
    let err = install_package(
        &StaticRegistry::mixed(),
        &executor,
        &RecordingReporter::default(),
        &request("10.0.0.3", "custom", "; && |"),
    )
    .await
    .expect_err("empty sanitized name must be rejected");

    assert_eq!(err, InstallError::EmptyPackageName);
    assert_eq!(executor.call_count(), 0);
}

#[test]
fn test_request_validation_happens_before_lookup() {
    assert_eq!(
        InstallRequest::parse("", "common", "git").unwrap_err(),
        InstallError::MissingServerAddress
    );
    assert!(matches!(
        InstallRequest::parse("10.0.0.2", "bogus", "git").unwrap_err(),
        InstallError::UnknownMode(_)
    ));
}

#[test]
fn test_unknown_mode_on_unregistered_server_is_bad_request() {
    // The registry is never consulted for a malformed request.
    let err = InstallRequest::parse("10.9.9.9", "bogus", "git").unwrap_err();
    assert!(StaticRegistry::mixed().lookup("10.9.9.9").is_none());
    assert_eq!(err, InstallError::UnknownMode("bogus".to_string()));
    assert_eq!(err.status(), RejectionStatus::BadRequest);
}

// ── Dry run: prepare composes without executing ───────────────────────────────

#[test]
fn test_prepare_install_root_catalog_composes_apk_command() {
    let prepared = prepare_install(
        &StaticRegistry::mixed(),
        &request("10.0.0.2", "common", "nginx"),
    )
    .expect("prepared");

    assert_eq!(prepared.command.text(), "apk update && apk add nginx");
    assert_eq!(prepared.command.target(), "10.0.0.2");
    assert_eq!(prepared.selection.mode(), InstallMode::Catalog);
}

#[test]
fn test_prepare_install_sudo_custom_sanitizes_and_wraps() {
    let prepared = prepare_install(
        &StaticRegistry::mixed(),
        &request("10.0.0.3", "custom", "htop; rm -rf /"),
    )
    .expect("prepared");

    assert_eq!(
        prepared.command.text(),
        "echo 'pw' | sudo -S apt update && echo 'pw' | sudo -S apt install -y htop"
    );
    assert!(!prepared.command.redacted().contains("'pw'"));
    assert_eq!(prepared.summary().package, "htop");
}

// ── Execution ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_execute_success_reports_output_and_marker() {
    let executor = RecordingExecutor::ok("Setting up git (1:2.39) ...\n");
    let reporter = RecordingReporter::default();
    let report = install_package(
        &StaticRegistry::mixed(),
        &executor,
        &reporter,
        &request("10.0.0.3", "common", "git"),
    )
    .await
    .expect("executed");

    assert!(report.outcome.success);
    assert!(report.outcome.failure_detail.is_none());
    assert!(report.log.starts_with(REPORT_HEADER));
    assert!(report.log.contains("Server: 10.0.0.3"));
    assert!(report.log.contains("Package: git (common)"));
    assert!(report.log.contains(SUCCESS_MARKER));
    assert!(report.log.ends_with("Output:\nSetting up git (1:2.39) ...\n"));

    let calls = executor.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "10.0.0.3");
    assert_eq!(
        calls[0].1,
        "echo 'pw' | sudo -S apt update && echo 'pw' | sudo -S apt install -y git"
    );

    let events = reporter.events.borrow();
    assert!(events[0].starts_with("step: Installing git on 10.0.0.3"));
    assert!(events[1].starts_with("success:"));
}

#[tokio::test]
async fn test_execute_nonzero_exit_is_reported_failure_with_output() {
    let executor = RecordingExecutor::new(Response::Exit(
        100,
        "E: Unable to locate package nosuchpkg\n".to_string(),
    ));
    let reporter = RecordingReporter::default();
    let report = install_package(
        &StaticRegistry::mixed(),
        &executor,
        &reporter,
        &request("10.0.0.2", "custom", "nosuchpkg"),
    )
    .await
    .expect("executed, not rejected");

    assert!(!report.outcome.success);
    assert_eq!(
        report.outcome.failure_detail.as_deref(),
        Some("remote command exited with status 100")
    );
    assert!(report.log.contains(&format!(
        "{FAILURE_MARKER}: remote command exited with status 100"
    )));
    assert!(report.log.contains("E: Unable to locate package nosuchpkg"));
    assert!(!report.log.contains(SUCCESS_MARKER));
    assert!(reporter.events.borrow()[1].starts_with("warn:"));
}

#[tokio::test]
async fn test_execute_transport_error_is_reported_failure_with_empty_output() {
    let executor = RecordingExecutor::new(Response::TransportError(
        "ssh: connect to host 10.0.0.2 port 22: Connection refused".to_string(),
    ));
    let report = install_package(
        &StaticRegistry::mixed(),
        &executor,
        &RecordingReporter::default(),
        &request("10.0.0.2", "common", "curl"),
    )
    .await
    .expect("executed, not rejected");

    assert!(!report.outcome.success);
    assert!(report.outcome.remote_output.is_empty());
    assert!(report.log.contains("Connection refused"));
    assert!(report.log.ends_with("Output:\n"));
    assert_eq!(executor.call_count(), 1, "no retry after transport failure");
}

#[tokio::test]
async fn test_execute_same_request_twice_yields_identical_reports() {
    let registry = StaticRegistry::mixed();
    let req = request("10.0.0.2", "common", "vim");

    let first = execute_install(
        &RecordingExecutor::ok("ok\n"),
        &RecordingReporter::default(),
        prepare_install(&registry, &req).expect("prepared"),
    )
    .await;
    let second = execute_install(
        &RecordingExecutor::ok("ok\n"),
        &RecordingReporter::default(),
        prepare_install(&registry, &req).expect("prepared"),
    )
    .await;

    assert_eq!(first.log, second.log);
}

#[tokio::test]
async fn test_concurrent_installs_on_different_servers_are_independent() {
    let registry = StaticRegistry::mixed();
    let root_exec = RecordingExecutor::ok("root\n");
    let sudo_exec = RecordingExecutor::new(Response::Exit(1, "sudo\n".to_string()));
    let reporter_a = RecordingReporter::default();
    let reporter_b = RecordingReporter::default();
    let req_a = request("10.0.0.2", "common", "nginx");
    let req_b = request("10.0.0.3", "common", "nginx");

    let (a, b) = tokio::join!(
        install_package(&registry, &root_exec, &reporter_a, &req_a),
        install_package(&registry, &sudo_exec, &reporter_b, &req_b),
    );
    let (a, b) = (a.expect("a executed"), b.expect("b executed"));

    assert!(a.outcome.success);
    assert!(!b.outcome.success);
    assert!(a.log.contains("Command: apk update && apk add nginx"));
    assert!(b.log.contains("sudo -S apt install -y nginx"));
}
