//! Job Submitter: creates an ad-hoc search job.

use splunk_client::{SearchJob, SearchJobsClient};
use tracing::info;

use crate::error::{AlertError, Operation};

/// Submit `query` and return the created job.
///
/// Failures are returned, not logged; the ad-hoc path boundary logs them.
pub async fn submit(transport: &SearchJobsClient, query: &str) -> Result<SearchJob, AlertError> {
    let job = transport
        .create_job(query)
        .await
        .map_err(|e| AlertError::from_client(Operation::CreateJob, e))?;

    info!("AdHoc Search job created successfully. SID: {}", job.sid);
    Ok(job)
}
