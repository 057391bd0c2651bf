//! Remote execution over ssh with password authentication.
//!
//! `sshpass` reads the password from its standard input when given no
//! `-p`/`-f`/`-e` option, so the secret never appears on a command line.

use anyhow::{Context, Result};
use fleetpkg_common::ServerProfile;

use crate::application::ports::{CommandRunner, RemoteExecutor, RemoteOutput};
use crate::domain::SshSettings;

const SSHPASS: &str = "sshpass";
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// `RemoteExecutor` that runs `sshpass ssh ... <command>` through a
/// `CommandRunner`.
pub struct SshRemoteExecutor<R> {
    runner: R,
    settings: SshSettings,
}

impl<R: CommandRunner> SshRemoteExecutor<R> {
    #[must_use]
    pub fn new(runner: R, settings: SshSettings) -> Self {
        Self { runner, settings }
    }

    /// Arguments passed to `sshpass`. The login name goes through `-l` so a
    /// user starting with `-` is never parsed as an option.
    #[must_use]
    pub fn ssh_args(&self, profile: &ServerProfile, command: &str) -> Vec<String> {
        vec![
            "ssh".to_string(),
            "-p".to_string(),
            self.settings.port.to_string(),
            "-o".to_string(),
            format!("StrictHostKeyChecking={}", self.settings.host_key_checking),
            "-o".to_string(),
            format!("ConnectTimeout={CONNECT_TIMEOUT_SECS}"),
            "-o".to_string(),
            "NumberOfPasswordPrompts=1".to_string(),
            "-o".to_string(),
            "LogLevel=ERROR".to_string(),
            "-l".to_string(),
            profile.user.clone(),
            profile.address.clone(),
            command.to_string(),
        ]
    }
}

impl<R: CommandRunner> RemoteExecutor for SshRemoteExecutor<R> {
    async fn run_remote_command(
        &self,
        profile: &ServerProfile,
        command: &str,
    ) -> Result<RemoteOutput> {
        let args = self.ssh_args(profile, command);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let mut password = profile.secret.clone().into_bytes();
        password.push(b'\n');

        tracing::debug!(
            server = %profile.address,
            port = self.settings.port,
            "opening ssh session"
        );
        let out = self
            .runner
            .run_with_stdin(SSHPASS, &arg_refs, &password)
            .await
            .with_context(|| format!("ssh to {} failed", profile.address))?;

        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&out.stderr));
        Ok(RemoteOutput {
            output,
            exit_code: out.status.code(),
        })
    }
}
