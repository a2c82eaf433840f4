//! Centralized constants for the Splunk search alert workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Splunk management port, used when the configured URL has none.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Alert actions talk to management ports with self-signed certificates,
/// so certificate verification is off unless explicitly re-enabled.
pub const DEFAULT_SKIP_VERIFY: bool = true;

// =============================================================================
// Search & Polling Defaults
// =============================================================================

/// Default maximum time to wait for ad-hoc search results in seconds.
///
/// A value of `0` in configuration disables the bound entirely.
pub const DEFAULT_MAX_WAIT_SECS: u64 = 300;

/// Default delay between result polls in milliseconds (`0` re-polls immediately).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 0;

/// Minimum spacing between "still waiting" log lines in seconds.
pub const WAIT_LOG_INTERVAL_SECS: u64 = 30;

// =============================================================================
// Saved Search Defaults
// =============================================================================

/// App context reported for saved searches without an owning app.
pub const DEFAULT_APP_CONTEXT: &str = "global";

/// Owner namespace used when dispatching a saved search whose ACL has no owner.
pub const DEFAULT_SAVED_SEARCH_OWNER: &str = "nobody";
