//! Saved search models for the Splunk saved search catalog.

use serde::Deserialize;
use splunk_config::constants::DEFAULT_APP_CONTEXT;

use super::common::SplunkResponse;

/// A catalog entry, with the name and ACL lifted out of the Splunk envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSearch {
    pub name: String,
    pub app: Option<String>,
    pub owner: Option<String>,
    pub disabled: bool,
}

impl SavedSearch {
    /// App namespace for logging; `"global"` when the ACL carries none.
    pub fn app_context(&self) -> &str {
        self.app
            .as_deref()
            .map(str::trim)
            .filter(|app| !app.is_empty())
            .unwrap_or(DEFAULT_APP_CONTEXT)
    }

    /// Whether this entry answers to `requested`, ignoring surrounding whitespace.
    pub fn matches_name(&self, requested: &str) -> bool {
        self.name.trim() == requested.trim()
    }
}

/// Wire shape of `entry[].content` for saved searches.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SavedSearchContent {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::bool_from_bool_string_or_number"
    )]
    pub disabled: bool,
}

/// Saved search list response.
pub type SavedSearchListResponse = SplunkResponse<SavedSearchContent>;

impl SavedSearchListResponse {
    /// Flatten the envelope into catalog entries, preserving order.
    pub fn into_saved_searches(self) -> Vec<SavedSearch> {
        self.entry
            .into_iter()
            .map(|entry| {
                let acl = entry.acl.unwrap_or_default();
                SavedSearch {
                    name: entry.name,
                    app: acl.app,
                    owner: acl.owner,
                    disabled: entry.content.disabled,
                }
            })
            .collect()
    }
}
