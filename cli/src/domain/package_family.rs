//! Package-manager families and install-verb translation.

use fleetpkg_common::{PrivilegeMode, ServerProfile};

/// The two package-manager syntaxes the composer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFamily {
    /// Debian/Ubuntu `apt`. Canonical form for catalog verbs.
    Apt,
    /// Alpine `apk`.
    Apk,
}

impl PackageFamily {
    /// Root servers are Alpine hosts; everything else is apt-based.
    #[must_use]
    pub fn for_server(profile: &ServerProfile) -> Self {
        match profile.privilege() {
            PrivilegeMode::Root => Self::Apk,
            PrivilegeMode::Sudo => Self::Apt,
        }
    }

    #[must_use]
    pub const fn install_verb(self) -> &'static str {
        match self {
            Self::Apt => "apt install -y",
            Self::Apk => "apk add",
        }
    }

    #[must_use]
    pub const fn update_command(self) -> &'static str {
        match self {
            Self::Apt => "apt update",
            Self::Apk => "apk update",
        }
    }

    /// Rewrite every occurrence of this family's install verb in `command`
    /// into `target`'s install verb. Identity when `self == target`.
    #[must_use]
    pub fn translate_install(self, command: &str, target: Self) -> String {
        if self == target {
            return command.to_string();
        }
        command.replace(self.install_verb(), target.install_verb())
    }
}
