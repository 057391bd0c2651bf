//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod catalog;
pub mod compose;
pub mod config;
pub mod error;
pub mod package_family;
pub mod report;
pub mod request;
pub mod sanitize;

pub use compose::{ComposedCommand, PackageSelection, compose};
pub use config::{FleetConfig, SshSettings, validate_config_key, validate_config_value};
pub use error::{ConfigError, ErrorKind, InstallError, RejectionStatus};
pub use package_family::PackageFamily;
pub use report::{ExecutionOutcome, RequestSummary, render_report};
pub use request::{InstallMode, InstallRequest};
pub use sanitize::sanitize_package_name;
