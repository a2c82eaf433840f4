//! Configuration management for the Splunk search alert.
//!
//! This crate turns the JSON payload delivered on stdin into a statically
//! validated [`Config`], applying environment overrides on the way.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{AlertPayload, ConfigError, ConfigLoader, PayloadConfiguration, env_var_or_none};
pub use types::{Config, ConnectionConfig, Credentials, PollingConfig, ServiceEndpoint};
