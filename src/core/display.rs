//! Display command execution
//!
//! Builds and runs the follow-up kubectl command against a resolved
//! target, returning its trimmed stdout for the CLI layer to print.

use crate::{
    config::Config,
    core::{invocation::Verb, resolver::ResolvedTarget},
    error::Result,
    utils::process::ProcessRunner,
};
use tracing::instrument;

/// Runs the display query against the external tool
pub struct DisplayExecutor {
    config: Config,
    runner: ProcessRunner,
}

impl DisplayExecutor {
    /// Create a new executor with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            runner: ProcessRunner::new(),
        }
    }

    /// Run `<verb> <kind>/<name> <flags...>` and return trimmed stdout
    #[instrument(skip(self, target, flags))]
    pub fn display(&self, verb: Verb, target: &ResolvedTarget, flags: &[String]) -> Result<String> {
        let subject = format!("{}/{}", target.kind, target.name);
        let mut args = vec![verb.as_str(), subject.as_str()];
        args.extend(flags.iter().map(String::as_str));

        self.run(&args)
    }

    /// Run `logs <pod-name> <flags...>` and return trimmed stdout
    #[instrument(skip(self, flags))]
    pub fn logs(&self, pod_name: &str, flags: &[String]) -> Result<String> {
        let mut args = vec!["logs", pod_name];
        args.extend(flags.iter().map(String::as_str));

        self.run(&args)
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let result = self
            .runner
            .run_command_with_output(&self.config.kubectl_bin, args)?;

        Ok(result.stdout.trim().to_string())
    }
}
