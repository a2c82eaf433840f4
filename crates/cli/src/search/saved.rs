//! Saved Search Resolver: finds a saved search by name and dispatches it.

use splunk_client::{SavedSearch, SplunkClient};
use tracing::{debug, info};

use crate::error::{AlertError, Operation};

/// First catalog entry whose trimmed name equals the trimmed request.
pub fn find_saved_search<'a>(catalog: &'a [SavedSearch], requested: &str) -> Option<&'a SavedSearch> {
    catalog.iter().find(|search| search.matches_name(requested))
}

/// Look up `report_name` in the catalog and dispatch it, returning the new SID.
pub async fn resolve_and_dispatch(
    session: &mut SplunkClient,
    report_name: &str,
) -> Result<String, AlertError> {
    let catalog = session
        .list_saved_searches()
        .await
        .map_err(|e| AlertError::from_client(Operation::DispatchSaved, e))?;
    debug!("Saved search catalog has {} entries", catalog.len());

    let search = find_saved_search(&catalog, report_name).ok_or_else(|| AlertError::NotFound {
        report: report_name.to_string(),
    })?;

    info!(
        "Saved Search '{}' found in App: {}. Executing...",
        report_name,
        search.app_context()
    );
    if search.disabled {
        debug!("Saved search '{}' is disabled; dispatching anyway", search.name);
    }

    let sid = session
        .dispatch_saved_search(search)
        .await
        .map_err(|e| AlertError::from_client(Operation::DispatchSaved, e))?;

    info!("Saved Search executed successfully. SID: {}", sid);
    Ok(sid)
}
