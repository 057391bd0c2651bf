//! Curated package catalog.
//!
//! The catalog is a fixed, process-wide table. Install verbs are written in
//! the canonical apt form; `PackageFamily` adapts them per target server.

use fleetpkg_common::CatalogItem;

/// A pre-vetted package that can be installed by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageCatalogEntry {
    /// Catalog key, matched exactly and case-sensitively.
    pub name: &'static str,
    pub description: &'static str,
    /// Canonical apt-family install command.
    pub install_verb: &'static str,
}

impl PackageCatalogEntry {
    #[must_use]
    pub fn to_item(&self) -> CatalogItem {
        CatalogItem {
            name: self.name.to_string(),
            description: self.description.to_string(),
            command: self.install_verb.to_string(),
        }
    }
}

static CATALOG: [PackageCatalogEntry; 10] = [
    PackageCatalogEntry {
        name: "nginx",
        description: "Web server",
        install_verb: "apt install -y nginx",
    },
    PackageCatalogEntry {
        name: "python3",
        description: "Python programming language",
        install_verb: "apt install -y python3",
    },
    PackageCatalogEntry {
        name: "nodejs",
        description: "JavaScript runtime",
        install_verb: "apt install -y nodejs npm",
    },
    PackageCatalogEntry {
        name: "git",
        description: "Version control system",
        install_verb: "apt install -y git",
    },
    PackageCatalogEntry {
        name: "docker",
        description: "Container platform",
        install_verb: "apt install -y docker.io",
    },
    PackageCatalogEntry {
        name: "postgresql",
        description: "SQL database",
        install_verb: "apt install -y postgresql postgresql-contrib",
    },
    PackageCatalogEntry {
        name: "mysql",
        description: "MySQL database",
        install_verb: "apt install -y mysql-server mysql-client",
    },
    PackageCatalogEntry {
        name: "vim",
        description: "Text editor",
        install_verb: "apt install -y vim",
    },
    PackageCatalogEntry {
        name: "curl",
        description: "Command line tool for transferring data",
        install_verb: "apt install -y curl",
    },
    PackageCatalogEntry {
        name: "wget",
        description: "Command line tool for retrieving files",
        install_verb: "apt install -y wget",
    },
];

/// All catalog entries in display order.
#[must_use]
pub fn entries() -> &'static [PackageCatalogEntry] {
    &CATALOG
}

/// Look up a catalog entry by exact key. Returns the first match.
#[must_use]
pub fn resolve(key: &str) -> Option<&'static PackageCatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == key)
}
