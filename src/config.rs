//! Configuration management for the tool
//!
//! Centralizes configuration options and provides validation.

use crate::error::LatestError;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable that overrides the kubectl binary to invoke.
///
/// Cluster connection and authentication stay with kubectl itself; this
/// only selects which executable the tool shells out to, which also lets
/// tests substitute a stub.
pub const KUBECTL_BIN_VAR: &str = "KUBECTL_LATEST_BIN";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Executable used for every cluster query
    pub kubectl_bin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kubectl_bin: "kubectl".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from the environment
    pub fn from_env() -> Result<Self, LatestError> {
        let config = match env::var(KUBECTL_BIN_VAR) {
            Ok(bin) => Self { kubectl_bin: bin },
            Err(_) => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), LatestError> {
        if self.kubectl_bin.trim().is_empty() {
            return Err(LatestError::config(format!(
                "{KUBECTL_BIN_VAR} is set but empty"
            )));
        }

        Ok(())
    }
}
