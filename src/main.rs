#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use kubectl_latest::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Capture the raw argument vector; nothing in it is interpreted as a
    // flag of this tool
    let args = cli::parse_args();

    setup_logging()?;

    // Initialize configuration
    let config = Config::from_env()?;

    // Execute the appropriate command
    cli::execute_command(&config, &args.argv)
}
