//! Install requests as submitted by the operator.

use std::fmt;

use crate::domain::error::InstallError;

/// How the selector of an install request is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    /// Selector is a catalog key (`"common"` on the wire).
    Catalog,
    /// Selector is a free-text package name (`"custom"` on the wire).
    Custom,
}

impl InstallMode {
    /// Parse the literal mode selector.
    ///
    /// # Errors
    ///
    /// Returns `InstallError::UnknownMode` for anything other than `common`
    /// or `custom`.
    pub fn parse(raw: &str) -> Result<Self, InstallError> {
        match raw {
            "common" => Ok(Self::Catalog),
            "custom" => Ok(Self::Custom),
            other => Err(InstallError::UnknownMode(other.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "common",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated install request. Constructed per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub server_address: String,
    pub mode: InstallMode,
    pub selector: String,
}

impl InstallRequest {
    /// Build a request from raw caller input.
    ///
    /// The server address is checked first, then the mode, matching the order
    /// in which a submission is rejected.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a missing or malformed address or an
    /// unknown mode.
    pub fn parse(server_address: &str, mode: &str, selector: &str) -> Result<Self, InstallError> {
        let server_address = server_address.trim();
        validate_server_address(server_address)?;
        let mode = InstallMode::parse(mode)?;
        Ok(Self {
            server_address: server_address.to_string(),
            mode,
            selector: selector.to_string(),
        })
    }
}

/// Checks that `address` can be handed to the transport as a host argument.
///
/// # Errors
///
/// Returns `MissingServerAddress` when empty, `InvalidServerAddress` when it
/// could be read as an option or split into several arguments.
pub fn validate_server_address(address: &str) -> Result<(), InstallError> {
    if address.is_empty() {
        return Err(InstallError::MissingServerAddress);
    }
    if address.starts_with('-') || address.chars().any(char::is_whitespace) {
        return Err(InstallError::InvalidServerAddress(address.to_string()));
    }
    Ok(())
}
