//! State shared by every command handler.

use std::time::Duration;

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::domain::SshSettings;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::ssh::SshRemoteExecutor;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Environment variables that disable confirmation prompts.
const NON_INTERACTIVE_ENV: [&str; 2] = ["CI", "FLEETPKG_YES"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Built once from the global flags and handed to each command.
pub struct AppContext {
    pub output: OutputContext,
    pub mode: OutputMode,
    pub config_store: YamlConfigStore,
    /// Skip prompts and take their default answer. Implied by `--json`.
    pub non_interactive: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(flags: &GlobalArgs) -> Self {
        let from_env = NON_INTERACTIVE_ENV
            .iter()
            .any(|var| std::env::var_os(var).is_some());
        let non_interactive = flags.yes || flags.json || from_env;
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode: if flags.json {
                OutputMode::Json
            } else {
                OutputMode::Human
            },
            config_store: YamlConfigStore,
            non_interactive,
        }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// The ssh transport, bounded by `settings.timeout_secs`.
    #[must_use]
    pub fn executor(&self, settings: &SshSettings) -> SshRemoteExecutor<TokioCommandRunner> {
        let runner = TokioCommandRunner::new(Duration::from_secs(settings.timeout_secs));
        SshRemoteExecutor::new(runner, settings.clone())
    }

    /// Ask a yes/no question, or return `default` without asking when
    /// running non-interactively.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        Ok(dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}
