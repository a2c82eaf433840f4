//! Saved search methods on [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SavedSearch;

impl SplunkClient {
    /// List the full saved search catalog in server order.
    pub async fn list_saved_searches(&mut self) -> Result<Vec<SavedSearch>> {
        let authorization = self.authorization().await?;
        endpoints::list_saved_searches(&self.http, &self.base_url, &authorization).await
    }

    /// Dispatch a saved search, returning the new job's SID.
    pub async fn dispatch_saved_search(&mut self, search: &SavedSearch) -> Result<String> {
        let authorization = self.authorization().await?;
        endpoints::dispatch_saved_search(&self.http, &self.base_url, &authorization, search).await
    }
}
