//! Server registry backed by the `servers` section of the config file.

use fleetpkg_common::{ServerProfile, ServerSummary};

use crate::application::ports::ServerRegistry;

/// In-memory registry over profiles loaded at startup. Read-only.
pub struct ConfigServerRegistry {
    servers: Vec<ServerProfile>,
}

impl ConfigServerRegistry {
    #[must_use]
    pub fn new(servers: Vec<ServerProfile>) -> Self {
        Self { servers }
    }
}

impl ServerRegistry for ConfigServerRegistry {
    fn lookup(&self, address: &str) -> Option<ServerProfile> {
        self.servers.iter().find(|s| s.address == address).cloned()
    }

    fn list(&self) -> Vec<ServerSummary> {
        self.servers.iter().map(ServerProfile::summary).collect()
    }
}
