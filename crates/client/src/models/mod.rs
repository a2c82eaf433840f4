//! Data models for the Splunk REST API.
//!
//! Only the shapes needed by the search alert are modelled: job identifiers,
//! result rows and the saved-search catalog.

mod common;
mod jobs;
mod saved_searches;

pub use common::{Acl, Entry, SplunkResponse, extract_sid};
pub use jobs::{JobState, ResultSet, ResultsPoll, SearchJob, parse_results};
pub use saved_searches::{SavedSearch, SavedSearchContent, SavedSearchListResponse};
