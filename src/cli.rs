use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::{Error, Result};
use crate::models::SearchDepth;

pub const DEFAULT_MAX_RESULTS: i64 = 5;

pub const USAGE: &str = "Usage: tavily-search \"search query\" [max_results]\n\
                         Example: tavily-search \"OpenClaw AI\" 5";

/// Whether a clap failure is really a request for help or version output.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

/// Turns a clap parse failure into a usage error, keeping only clap's
/// first line.
pub fn usage_error(err: &clap::Error) -> Error {
    let rendered = err.to_string();
    let reason = rendered.lines().next().unwrap_or("error: invalid arguments");
    Error::usage(reason.to_string())
}

/// Search the web through the Tavily API and print the results.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Free-text search query. May start with `-`.
    #[clap(allow_hyphen_values = true)]
    pub query: Option<String>,
    /// Number of results to ask for.
    #[clap(allow_negative_numbers = true)]
    pub max_results: Option<String>,
    /// Search depth requested from the service.
    #[clap(long, value_enum, default_value_t = SearchDepth::Basic)]
    pub depth: SearchDepth,
    /// Request timeout in seconds, 0 waits forever.
    #[clap(long, default_value_t = 30)]
    pub timeout: u64,
    /// Print the raw results as JSON instead of the text report.
    #[clap(long)]
    pub json: bool,
}

/// A validated invocation, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub query: String,
    pub max_results: i64,
    pub depth: SearchDepth,
    pub timeout: Option<Duration>,
    pub json: bool,
}

impl Cli {
    /// Parses `args`. `--help` and `--version` come back as clap errors
    /// of the matching kind; anything else clap rejects is a usage error.
    pub fn parse_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Checks the query and result limit.
    pub fn into_invocation(self) -> Result<Invocation> {
        let query = match self.query {
            Some(query) if !query.trim().is_empty() => query,
            Some(_) => return Err(Error::usage("Error: search query is empty")),
            None => return Err(Error::usage("Error: missing search query")),
        };

        let max_results = match self.max_results {
            Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
                Error::usage(format!("Error: max_results must be an integer, got '{raw}'"))
            })?,
            None => DEFAULT_MAX_RESULTS,
        };

        Ok(Invocation {
            query,
            max_results,
            depth: self.depth,
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            json: self.json,
        })
    }
}
