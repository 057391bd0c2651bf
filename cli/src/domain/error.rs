//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Install errors ────────────────────────────────────────────────────────────

/// Reasons an install request is rejected before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallError {
    #[error("Server address is required.")]
    MissingServerAddress,

    #[error("Invalid server address '{0}': must not start with '-' or contain whitespace.")]
    InvalidServerAddress(String),

    #[error("Invalid software type '{0}'. Expected 'common' or 'custom'.")]
    UnknownMode(String),

    #[error("Custom software name is required (nothing left after removing shell metacharacters).")]
    EmptyPackageName,

    #[error("Server '{0}' not found. Run 'fleetpkg servers' to list registered servers.")]
    ServerNotFound(String),

    #[error("Selected software '{0}' not found. Run 'fleetpkg catalog' to list available packages.")]
    CatalogKeyNotFound(String),
}

/// Coarse error taxonomy for rejected requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// User input malformed.
    Validation,
    /// Server address or catalog key not found.
    Lookup,
}

/// HTTP-style classification handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionStatus {
    BadRequest,
    NotFound,
    /// Raised by HTTP front ends for non-POST submissions; never by the CLI.
    MethodNotAllowed,
}

impl RejectionStatus {
    #[must_use]
    pub fn http_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
        }
    }
}

impl InstallError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingServerAddress
            | Self::InvalidServerAddress(_)
            | Self::UnknownMode(_)
            | Self::EmptyPackageName => ErrorKind::Validation,
            Self::ServerNotFound(_) | Self::CatalogKeyNotFound(_) => ErrorKind::Lookup,
        }
    }

    /// Unknown catalog keys come from a submitted selection, so they are a bad
    /// request; only an unknown server is "not found".
    #[must_use]
    pub fn status(&self) -> RejectionStatus {
        match self {
            Self::ServerNotFound(_) => RejectionStatus::NotFound,
            _ => RejectionStatus::BadRequest,
        }
    }

    /// Stable machine-readable code for JSON error objects.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingServerAddress => "missing_server_address",
            Self::InvalidServerAddress(_) => "invalid_server_address",
            Self::UnknownMode(_) => "unknown_mode",
            Self::EmptyPackageName => "empty_package_name",
            Self::ServerNotFound(_) => "server_not_found",
            Self::CatalogKeyNotFound(_) => "catalog_key_not_found",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value and registry validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },

    #[error("Server '{0}' is registered more than once.")]
    DuplicateServer(String),

    #[error("Invalid server entry '{address}': {reason}")]
    InvalidServer { address: String, reason: String },
}
