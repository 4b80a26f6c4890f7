//! Process execution utilities
//!
//! Provides safe process execution with proper error handling and logging.
//! Every external invocation the tool makes is funneled through here so
//! failures carry uniform diagnostics.

use crate::error::{LatestError, Result};
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// Utility for running external processes
#[derive(Debug, Default)]
pub struct ProcessRunner;

/// Result of a process execution
#[derive(Debug)]
pub struct ProcessResult {
    /// Exit status code
    pub exit_code: Option<i32>,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Whether the process was successful
    pub success: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run a command and capture its output
    ///
    /// The child is fully reaped before this returns; both streams are
    /// captured regardless of exit status.
    #[instrument(skip(self))]
    pub fn run_command_with_output(&self, command: &str, args: &[&str]) -> Result<ProcessResult> {
        let cmd_str = format!("{} {}", command, args.join(" "));

        debug!("Running command with output capture: {}", cmd_str);

        let mut cmd = Command::new(command);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());

        let output = cmd.output().map_err(|e| {
            LatestError::process(
                cmd_str.clone(),
                None,
                String::new(),
                format!("Failed to execute command: {e}"),
            )
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let success = output.status.success();
        let exit_code = output.status.code();

        debug!(
            "Command finished: success={}, exit_code={:?}, stdout_len={}, stderr_len={}",
            success,
            exit_code,
            stdout.len(),
            stderr.len()
        );

        if !success {
            debug!("Command stderr: {}", stderr);
            return Err(LatestError::process(cmd_str, exit_code, stdout, stderr));
        }

        Ok(ProcessResult {
            exit_code,
            stdout,
            stderr,
            success,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_with_output() {
        let runner = ProcessRunner::new();
        let result = runner
            .run_command_with_output("echo", &["hello", "world"])
            .unwrap();

        assert!(result.success);
        assert_eq!(result.stdout.trim(), "hello world");
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn test_run_failing_command() {
        let runner = ProcessRunner::new();
        let result = runner.run_command_with_output("false", &[]);
        assert!(result.is_err());

        if let Err(LatestError::Process {
            command, exit_code, ..
        }) = result
        {
            assert_eq!(command, "false ");
            assert_eq!(exit_code, Some(1));
        } else {
            panic!("Expected Process error");
        }
    }

    #[test]
    fn test_failing_command_captures_streams() {
        let runner = ProcessRunner::new();
        let result =
            runner.run_command_with_output("sh", &["-c", "echo out; echo err >&2; exit 3"]);

        match result {
            Err(LatestError::Process {
                exit_code,
                stdout,
                stderr,
                ..
            }) => {
                assert_eq!(exit_code, Some(3));
                assert_eq!(stdout.trim(), "out");
                assert_eq!(stderr.trim(), "err");
            }
            other => panic!("Expected Process error, got {other:?}"),
        }
    }

    #[test]
    fn test_spawn_failure_is_error() {
        let runner = ProcessRunner::new();
        let result = runner.run_command_with_output("nonexistent_command_12345", &[]);
        assert!(result.is_err());
    }
}
