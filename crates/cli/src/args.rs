//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Reject every invocation other than `--execute` as an invocation error.
//!
//! Non-responsibilities:
//! - Does not read the configuration payload (see `splunk_config::ConfigLoader`).

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;

use crate::error::AlertError;

#[derive(Parser, Debug)]
#[command(name = "splunk-search-alert")]
#[command(
    about = "Run an ad-hoc search and/or dispatch a saved search from a Splunk alert action",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "The configuration payload is read as JSON from stdin:\n  {\"configuration\": {\"username\": \"...\", \"password\": \"...\", \"url\": \"https://host:8089/services/search/jobs\", \"query\": \"...\", \"report_name\": \"...\"}}\n\nExample:\n  splunk-search-alert --execute < payload.json\n"
)]
pub struct Cli {
    /// Execute the alert action using the payload on stdin
    #[arg(long)]
    pub execute: bool,
}

/// Parse the process arguments.
///
/// `--help` and `--version` print and exit 0. Anything that does not parse,
/// or parses without `--execute`, is an invocation error.
pub fn parse() -> Result<Cli, AlertError> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Result<Cli, AlertError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) if cli.execute => Ok(cli),
        Ok(_) => Err(AlertError::Invocation),
        Err(e) if matches!(
            e.kind(),
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
        ) =>
        {
            e.exit()
        }
        Err(e) => {
            tracing::debug!("Argument parsing failed: {:?}", e.kind());
            Err(AlertError::Invocation)
        }
    }
}
