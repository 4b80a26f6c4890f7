//! Command-line argument capture
//!
//! kubectl-latest interprets no flags of its own: everything on the
//! command line is captured raw and fed through verb/noun classification,
//! with whatever is left over forwarded verbatim to kubectl. clap's help
//! and version flags are disabled so that `-h`/`--help`/`-V` reach the
//! downstream command untouched; usage comes from the literal `help` word.

use clap::Parser;

/// kubectl-latest - run get/describe/logs against the most recent resource
#[derive(Parser, Debug)]
#[command(name = "kubectl-latest")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Raw argument vector: optional verb, optional noun, trailing flags
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub argv: Vec<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
