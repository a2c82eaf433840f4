//! Search execution components.
//!
//! - `adhoc`: Job Submitter for ad-hoc queries.
//! - `poller`: Result Poller with rate-limited progress logging.
//! - `saved`: Saved Search Resolver (catalog lookup and dispatch).

pub mod adhoc;
pub mod poller;
pub mod saved;

pub use adhoc::submit;
pub use poller::ResultPoller;
pub use saved::resolve_and_dispatch;
