//! Command implementations for the CLI

use crate::{
    config::Config,
    core::{DisplayExecutor, Invocation, LatestResolver, Verb},
};
use anyhow::Context;
use tracing::{debug, instrument};

const USAGE: &str = r#"Usage: kubectl-latest [verb] [noun] [flags...]
Returns the most recently created resource of a particular type.

* All resource types are supported.
* Arbitrary flags are passed on to the underlying kubectl commands.
* "get" and "describe" are the only kubectl output subcommands supported,
  plus the special "logs" path for the most recent pod.

Trigger this output:
	kubectl-latest help

Defaults:
	Verb: get
	Noun: all

Examples:
	# Return the "get" output of the most recent resource (across all types)
	kubectl-latest get

	# Return the "get" output of the most recent pod, using the pod short syntax "po"
	kubectl-latest po

	# or equivalently
	kubectl-latest get po

	# Return the logs of the most recent pod
	kubectl-latest logs

	# Return the "get" output in yaml format of the most recent deployment.
	# kubectl-latest passes arbitrary flags on to kubectl
	kubectl-latest deployment -o yaml

	# Return the "describe" output of the most recent service.
	kubectl-latest describe svc"#;

/// Execute the appropriate command based on the raw argument vector
#[instrument(skip(config, argv))]
pub fn execute_command(config: &Config, argv: &[String]) -> anyhow::Result<()> {
    let invocation = Invocation::classify(argv);
    debug!("Classified invocation: {:?}", invocation);

    match invocation {
        Invocation::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Invocation::Logs { flags } => execute_logs_command(config, &flags),
        Invocation::Display { verb, noun, flags } => {
            execute_display_command(config, verb, &noun, &flags)
        }
    }
}

/// Show logs of the most recently created pod
#[instrument(skip(config, flags))]
fn execute_logs_command(config: &Config, flags: &[String]) -> anyhow::Result<()> {
    let target = LatestResolver::new(config.clone())
        .resolve("pod")
        .context("getting latest pod")?;

    let output = DisplayExecutor::new(config.clone())
        .logs(&target.name, flags)
        .with_context(|| format!("getting logs of pod {}", target.name))?;

    println!("{output}");
    Ok(())
}

/// Run the display verb against the most recently created instance of a noun
#[instrument(skip(config, flags))]
fn execute_display_command(
    config: &Config,
    verb: Verb,
    noun: &str,
    flags: &[String],
) -> anyhow::Result<()> {
    let target = LatestResolver::new(config.clone())
        .resolve(noun)
        .with_context(|| format!("getting latest {noun}"))?;

    let output = DisplayExecutor::new(config.clone())
        .display(verb, &target, flags)
        .with_context(|| format!("running {verb} on {}/{}", target.kind, target.name))?;

    println!("{output}");
    Ok(())
}
