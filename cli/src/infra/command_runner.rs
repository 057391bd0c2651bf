//! Local process execution for the ssh transport.

use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;

use crate::application::ports::CommandRunner;

/// Runs programs with tokio. The whole run, including feeding stdin, is
/// bounded by `timeout`; on expiry the child is dropped and therefore killed.
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run_with_stdin(&self, program: &str, args: &[&str], input: &[u8]) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let run = async {
            if let Some(mut stdin) = child.stdin.take() {
                // A child may exit without reading its input; that shows up in its status.
                let _ = stdin.write_all(input).await;
            }
            child.wait_with_output().await
        };

        match tokio::time::timeout(self.timeout, run).await {
            Ok(output) => output.with_context(|| format!("waiting for {program}")),
            Err(_) => {
                tracing::warn!(
                    program,
                    timeout_secs = self.timeout.as_secs(),
                    "process timed out, killed"
                );
                anyhow::bail!("{program} timed out after {}s", self.timeout.as_secs())
            }
        }
    }
}
