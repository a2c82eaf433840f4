//! Configuration loader for the alert payload and environment.
//!
//! Responsibilities:
//! - Parse the JSON payload delivered on stdin.
//! - Apply environment variable overrides for operational settings.
//! - Validate mandatory fields once, before any component runs.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Deciding which execution paths run (see the alert binary).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over payload values.
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod payload;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use payload::{AlertPayload, PayloadConfiguration};

#[cfg(test)]
mod tests;
