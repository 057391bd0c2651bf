//! Command composition: package selection + server profile → command line.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::fmt;

use fleetpkg_common::ServerProfile;

use crate::domain::catalog::{self, PackageCatalogEntry};
use crate::domain::error::InstallError;
use crate::domain::package_family::PackageFamily;
use crate::domain::request::{InstallMode, InstallRequest};
use crate::domain::sanitize::sanitize_package_name;

const SECRET_MASK: &str = "****";

/// What to install, after catalog lookup or sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSelection {
    Catalog(&'static PackageCatalogEntry),
    /// A sanitized single-token package name.
    Custom(String),
}

impl PackageSelection {
    /// Interpret `selector` according to `mode`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogKeyNotFound` for an unlisted key, or
    /// `EmptyPackageName` when a custom name sanitizes to nothing.
    pub fn resolve(mode: InstallMode, selector: &str) -> Result<Self, InstallError> {
        match mode {
            InstallMode::Catalog => catalog::resolve(selector)
                .map(Self::Catalog)
                .ok_or_else(|| InstallError::CatalogKeyNotFound(selector.to_string())),
            InstallMode::Custom => {
                let token = sanitize_package_name(selector);
                if token.is_empty() {
                    return Err(InstallError::EmptyPackageName);
                }
                Ok(Self::Custom(token))
            }
        }
    }

    /// Resolve the selection carried by a request.
    ///
    /// # Errors
    ///
    /// See [`PackageSelection::resolve`].
    pub fn from_request(request: &InstallRequest) -> Result<Self, InstallError> {
        Self::resolve(request.mode, &request.selector)
    }

    #[must_use]
    pub fn mode(&self) -> InstallMode {
        match self {
            Self::Catalog(_) => InstallMode::Catalog,
            Self::Custom(_) => InstallMode::Custom,
        }
    }

    /// Catalog key or sanitized package name.
    #[must_use]
    pub fn package(&self) -> &str {
        match self {
            Self::Catalog(entry) => entry.name,
            Self::Custom(token) => token,
        }
    }

    /// The canonical apt-family install command for this selection.
    #[must_use]
    pub fn base_install_command(&self) -> String {
        match self {
            Self::Catalog(entry) => entry.install_verb.to_string(),
            Self::Custom(token) => format!("{} {token}", PackageFamily::Apt.install_verb()),
        }
    }
}

/// The exact command line handed to the remote transport.
#[derive(Clone, PartialEq, Eq)]
pub struct ComposedCommand {
    text: String,
    redacted: String,
    target: String,
}

impl ComposedCommand {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The command with the privilege secret masked, for logs.
    #[must_use]
    pub fn redacted(&self) -> &str {
        &self.redacted
    }

    /// Address of the server the command is meant for.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Debug for ComposedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedCommand")
            .field("text", &self.redacted)
            .field("target", &self.target)
            .finish()
    }
}

/// Compose the install command for `selection` on the server `profile`.
///
/// - `root` servers are treated as apk hosts:
///   `apk update && apk add <pkg>`.
/// - any other user gets the apt form with the secret piped into `sudo -S`:
///   `echo '<secret>' | sudo -S apt update && echo '<secret>' | sudo -S apt install -y <pkg>`.
///
/// The secret is inserted verbatim: it comes from the registry, not from the
/// operator, and is never sanitized.
///
/// # Errors
///
/// Returns `EmptyPackageName` for a custom selection with an empty token.
pub fn compose(
    selection: &PackageSelection,
    profile: &ServerProfile,
) -> Result<ComposedCommand, InstallError> {
    if let PackageSelection::Custom(token) = selection
        && token.is_empty()
    {
        return Err(InstallError::EmptyPackageName);
    }

    let base = selection.base_install_command();
    let family = PackageFamily::for_server(profile);
    Ok(ComposedCommand {
        text: render(family, &base, &profile.secret),
        redacted: render(family, &base, SECRET_MASK),
        target: profile.address.clone(),
    })
}

fn render(family: PackageFamily, base: &str, secret: &str) -> String {
    match family {
        PackageFamily::Apk => {
            let install = PackageFamily::Apt.translate_install(base, PackageFamily::Apk);
            format!("{} && {install}", PackageFamily::Apk.update_command())
        }
        PackageFamily::Apt => {
            // Only reachable with an apk verb if a caller pre-translated the
            // base command; normalized back regardless. Intent unverified.
            let install = PackageFamily::Apk.translate_install(base, PackageFamily::Apt);
            let elevate = format!("echo '{secret}' | sudo -S");
            format!(
                "{elevate} {} && {elevate} {install}",
                PackageFamily::Apt.update_command()
            )
        }
    }
}
