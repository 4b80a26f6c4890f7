//! Latest-resource lookup
//!
//! Asks kubectl for every instance of a kind sorted by creation
//! timestamp and keeps the last one. The go-template folds the item list
//! down to a single "<name> <kind>" line and emits nothing when the list
//! is empty.

use crate::{
    config::Config,
    error::{LatestError, Result},
    utils::process::ProcessRunner,
};
use tracing::{debug, instrument};

const SORT_BY_CREATION: &str = "--sort-by={.metadata.creationTimestamp}";
const LAST_ITEM_TEMPLATE: &str = concat!(
    "--template={{$latest := \"\"}}",
    "{{range .items}}{{$latest = (printf \"%s %s\" .metadata.name .kind)}}{{end}}",
    "{{printf \"%s\" $latest}}",
);

/// Name and kind of the most recently created instance of a noun
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub name: String,
    pub kind: String,
}

/// Finds the single most recently created instance of a resource kind
pub struct LatestResolver {
    config: Config,
    runner: ProcessRunner,
}

impl LatestResolver {
    /// Create a new resolver with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            runner: ProcessRunner::new(),
        }
    }

    /// Resolve the most recently created instance of `noun`
    #[instrument(skip(self))]
    pub fn resolve(&self, noun: &str) -> Result<ResolvedTarget> {
        let args = Self::query_args(noun);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        let result = self
            .runner
            .run_command_with_output(&self.config.kubectl_bin, &arg_refs)?;

        let target = parse_target(noun, &result.stdout)?;
        debug!("Resolved latest {}: {}/{}", noun, target.kind, target.name);

        Ok(target)
    }

    /// kubectl arguments for the resolve-latest query
    fn query_args(noun: &str) -> Vec<String> {
        vec![
            "get".to_string(),
            noun.to_string(),
            SORT_BY_CREATION.to_string(),
            "-o=go-template".to_string(),
            LAST_ITEM_TEMPLATE.to_string(),
        ]
    }
}

/// Parse a "<name> <kind>" lookup line into a target
///
/// Empty output means no instance of the noun exists; output without a
/// second field means the query answered with something unexpected. Both
/// are reported as errors rather than indexed blindly.
fn parse_target(noun: &str, output: &str) -> Result<ResolvedTarget> {
    let line = output.trim();
    if line.is_empty() {
        return Err(LatestError::no_resources(noun));
    }

    match line.split_once(' ') {
        Some((name, kind)) if !name.is_empty() && !kind.is_empty() => Ok(ResolvedTarget {
            name: name.to_string(),
            kind: kind.to_string(),
        }),
        _ => Err(LatestError::lookup(noun, line)),
    }
}
