//! Configuration type definitions for the Splunk search alert.
//!
//! Responsibilities:
//! - Define the validated configuration handed to the execution paths.
//! - Keep credentials behind `secrecy::SecretString`.
//! - Derive the service endpoints (jobs URL, session base URL) from the configured URL.
//!
//! Does NOT handle:
//! - Reading the JSON payload or environment (see `loader` module).
//! - Network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - A `Config` value only exists after mandatory fields were validated.
//! - Secret types never expose their contents through `Debug`.

mod auth;
mod connection;

pub use auth::Credentials;
pub use connection::{Config, ConnectionConfig, PollingConfig, ServiceEndpoint};
