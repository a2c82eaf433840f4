//! Splunk search alert action.
//!
//! Reads a JSON configuration payload from stdin, then runs an ad-hoc
//! search and/or dispatches a saved search. All output goes to stderr.

mod args;
mod error;
mod logging;
mod orchestrator;
mod search;

#[cfg(test)]
mod test_support;

use splunk_config::{Config, ConfigLoader};
use tracing::{debug, error};

use crate::error::{AlertError, ErrorKind, ExitCode};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let code = match execute().await {
        Ok(()) => ExitCode::Success,
        Err(err) => report(&err),
    };

    std::process::exit(code.as_i32());
}

async fn execute() -> Result<(), AlertError> {
    args::parse()?;
    let config = load_config()?;

    let summary = orchestrator::run(&config).await?;
    if let Some(outcome) = &summary.adhoc {
        debug!("Ad-hoc path {}", outcome);
    }
    if let Some(outcome) = &summary.saved {
        debug!("Saved-search path {}", outcome);
    }
    Ok(())
}

fn load_config() -> Result<Config, AlertError> {
    let config = ConfigLoader::new()
        .load_dotenv()?
        .from_payload_reader(std::io::stdin().lock())?
        .from_env()
        .build()?;
    Ok(config)
}

/// Log a fatal error and pick the exit code for it.
fn report(err: &AlertError) -> ExitCode {
    let kind = err.kind();
    match kind {
        ErrorKind::Invocation => error!(fatal = true, "{}", err),
        ErrorKind::Configuration => error!("{}", err),
        _ => error!("Unexpected error: {}", err),
    }

    if kind.is_fatal() {
        kind.exit_code()
    } else {
        ExitCode::UnexpectedFailure
    }
}
