//! REST API endpoint implementations.
//!
//! Each function issues exactly one request. There is no retry layer: the
//! only repeated request is the results poll, and its policy lives with the caller.

mod auth;
mod jobs;
mod request;
mod saved;
pub mod url_encoding;

pub use auth::login;
pub use jobs::{create_job, fetch_results};
pub use request::{api_error, send_request};
pub use saved::{dispatch_path, dispatch_saved_search, list_saved_searches};
pub use url_encoding::encode_path_segment;
