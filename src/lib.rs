//! # kubectl-latest
//!
//! A kubectl plugin that finds the most recently created resource of a
//! given kind and runs a read-only follow-up command (`get`, `describe`,
//! or `logs`) against it, forwarding arbitrary extra flags to kubectl.
//!
//! ## Features
//!
//! - Verb/noun classification with sensible defaults (`get` / `all`)
//! - Creation-timestamp lookup delegated entirely to kubectl
//! - Verbatim flag pass-through to the underlying commands
//! - Structured errors carrying the failed command line and both streams
//!
//! ## Example
//!
//! ```no_run
//! use kubectl_latest::{cli, config::Config};
//!
//! let config = Config::from_env()?;
//! cli::execute_command(&config, &["describe".to_string(), "svc".to_string()])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with verbosity taken from `RUST_LOG`
///
/// The tool parses no flags of its own, so there is no `--debug` switch;
/// diagnostics are enabled with `RUST_LOG=debug`.
pub fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
