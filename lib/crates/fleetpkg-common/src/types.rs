use std::fmt;

use serde::{Deserialize, Serialize};

/// A managed server as stored in the registry.
///
/// The secret is the privilege credential used for `sudo -S` elevation and
/// for transport authentication. It round-trips through the config file but
/// never appears in `Debug` output; show [`ServerSummary`] to operators.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerProfile {
    pub address: String,
    pub user: String,
    #[serde(default)]
    pub secret: String,
}

impl ServerProfile {
    /// The registry user name that marks a server as already privileged.
    pub const ROOT_USER: &'static str = "root";

    #[must_use]
    pub fn new(
        address: impl Into<String>,
        user: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            user: user.into(),
            secret: secret.into(),
        }
    }

    /// How commands on this server gain privileges.
    #[must_use]
    pub fn privilege(&self) -> PrivilegeMode {
        if self.user == Self::ROOT_USER {
            PrivilegeMode::Root
        } else {
            PrivilegeMode::Sudo
        }
    }

    /// Summary safe to show to operators.
    #[must_use]
    pub fn summary(&self) -> ServerSummary {
        ServerSummary {
            address: self.address.clone(),
            user: self.user.clone(),
            privilege: self.privilege(),
        }
    }
}

impl fmt::Debug for ServerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerProfile")
            .field("address", &self.address)
            .field("user", &self.user)
            .field("secret", &"****")
            .finish()
    }
}

/// Privilege level derived from the registry user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrivilegeMode {
    /// Commands run directly; the server uses the apk package manager.
    Root,
    /// Commands are elevated with a password piped into `sudo -S`; apt family.
    Sudo,
}

impl fmt::Display for PrivilegeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::Sudo => f.write_str("sudo"),
        }
    }
}

/// Secret-free view of a registry entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerSummary {
    pub address: String,
    pub user: String,
    pub privilege: PrivilegeMode,
}

/// One curated catalog entry, as listed to operators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
    pub command: String,
}

/// Machine-readable result of an executed install.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallOutput {
    pub server: String,
    pub command: String,
    pub success: bool,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}
