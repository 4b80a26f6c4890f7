//! Raw argument classification
//!
//! Turns the untouched argument vector into a verb, a noun, and the
//! trailing flags that get forwarded verbatim to kubectl. Nouns are never
//! validated here; an unknown kind simply fails at lookup time.

use std::fmt;

/// Verb used when the invocation does not name one
pub const DEFAULT_VERB: Verb = Verb::Get;

/// Resource kind used when the invocation does not name one
pub const DEFAULT_NOUN: &str = "all";

/// Display operation to run against the resolved resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Describe,
}

impl Verb {
    /// The kubectl subcommand this verb maps to
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Describe => "describe",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "get" => Some(Self::Get),
            "describe" => Some(Self::Describe),
            _ => None,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified command-line invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the usage block and exit successfully
    Help,
    /// Show logs of the most recent pod; flags pass through untouched
    Logs { flags: Vec<String> },
    /// Run `<verb>` against the most recent instance of `<noun>`
    Display {
        verb: Verb,
        noun: String,
        flags: Vec<String>,
    },
}

impl Invocation {
    /// Classify a raw argument vector
    ///
    /// Precedence: the literal `help` wins; an empty invocation behaves as
    /// if the default noun had been given; `logs` bypasses verb/noun
    /// resolution entirely; then an optional verb, an optional noun, and
    /// everything left over is a trailing flag.
    pub fn classify(args: &[String]) -> Self {
        if args.first().is_some_and(|a| a == "help") {
            return Self::Help;
        }

        let substituted = [DEFAULT_NOUN.to_string()];
        let mut rest: &[String] = if args.is_empty() { &substituted } else { args };

        if rest[0] == "logs" {
            return Self::Logs {
                flags: rest[1..].to_vec(),
            };
        }

        let verb = match Verb::from_token(&rest[0]) {
            Some(v) => {
                rest = &rest[1..];
                v
            }
            None => DEFAULT_VERB,
        };

        let noun = match rest.first() {
            Some(n) => {
                let n = n.clone();
                rest = &rest[1..];
                n
            }
            None => DEFAULT_NOUN.to_string(),
        };

        Self::Display {
            verb,
            noun,
            flags: rest.to_vec(),
        }
    }
}
