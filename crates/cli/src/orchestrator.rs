//! Execution Orchestrator.
//!
//! Responsibilities:
//! - Build both clients and establish the session once.
//! - Run the ad-hoc path and the saved-search path, each best-effort.
//! - Log exactly one ERROR line per failed path at its boundary.
//!
//! Does NOT handle:
//! - Fatal error reporting or exit codes (see `main`).
//!
//! Invariants:
//! - A failure on one path never prevents the other from running.
//! - Only client construction and login failures are returned as errors.

use std::fmt;

use anyhow::Context;
use splunk_client::{SearchJobsClient, SplunkClient};
use splunk_config::Config;
use tracing::{debug, error, warn};

use crate::error::{AlertError, ErrorKind};
use crate::search::{self, ResultPoller};

/// How one path ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    Completed { sid: String },
    Failed(ErrorKind),
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOutcome::Completed { sid } => write!(f, "completed (SID {})", sid),
            PathOutcome::Failed(kind) => write!(f, "failed ({:?})", kind),
        }
    }
}

/// Outcome of each path that was requested by the payload.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub adhoc: Option<PathOutcome>,
    pub saved: Option<PathOutcome>,
}

pub async fn run(config: &Config) -> Result<RunSummary, AlertError> {
    let transport =
        SearchJobsClient::from_config(config).context("Failed to build search jobs client")?;
    let mut session = SplunkClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build session client")?;

    debug!(
        "Connecting to {}:{}",
        config.service.host, config.service.port
    );
    session.login().await.map_err(AlertError::Session)?;

    if config.query.is_none() && config.report_name.is_none() {
        warn!("Neither query nor report_name provided; nothing to execute.");
    }

    let mut summary = RunSummary::default();

    if let Some(query) = config.query.as_deref() {
        summary.adhoc = Some(run_adhoc(&transport, config, query).await);
    }

    if let Some(report_name) = config.report_name.as_deref() {
        summary.saved = Some(run_saved(&mut session, report_name).await);
    }

    Ok(summary)
}

async fn run_adhoc(transport: &SearchJobsClient, config: &Config, query: &str) -> PathOutcome {
    debug!("Submitting ad-hoc search {}", splunk_client::redact_query(query));

    let mut job = match search::submit(transport, query).await {
        Ok(job) => job,
        Err(e) => {
            error!("{}", e);
            return PathOutcome::Failed(e.kind());
        }
    };

    match ResultPoller::new(transport, &config.polling)
        .poll(&mut job)
        .await
    {
        Ok(_) => PathOutcome::Completed { sid: job.sid },
        Err(e) => {
            error!("{}", e);
            PathOutcome::Failed(e.kind())
        }
    }
}

async fn run_saved(session: &mut SplunkClient, report_name: &str) -> PathOutcome {
    match search::resolve_and_dispatch(session, report_name).await {
        Ok(sid) => PathOutcome::Completed { sid },
        Err(e) => {
            error!("{}", e);
            error!("Failed to execute Saved Search '{}'.", report_name);
            PathOutcome::Failed(e.kind())
        }
    }
}
