//! Error types for the latest-resource tool
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for the tool
#[derive(Error, Debug)]
pub enum LatestError {
    /// The lookup returned no resources for the requested kind
    #[error("no {noun} resources found")]
    NoResources { noun: String },

    /// The lookup output could not be parsed into a name/kind pair
    #[error("unexpected lookup output for {noun}: {output:?}")]
    Lookup { noun: String, output: String },

    /// Subprocess spawn failure or non-zero exit
    #[error("running {command}: exit code {exit_code:?}, stdout: {stdout:?}, stderr: {stderr:?}")]
    Process {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl LatestError {
    /// Create a new no-resources error
    pub fn no_resources(noun: impl Into<String>) -> Self {
        Self::NoResources { noun: noun.into() }
    }

    /// Create a new lookup-output error
    pub fn lookup(noun: impl Into<String>, output: impl Into<String>) -> Self {
        Self::Lookup {
            noun: noun.into(),
            output: output.into(),
        }
    }

    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            source: None,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LatestError>;
