//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and payload application.
//! - Test environment variable handling and precedence.
//! - Test mandatory field and URL validation.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Tests touching process environment use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// A loader with every mandatory field populated.
pub fn complete_loader() -> crate::loader::builder::ConfigLoader {
    crate::loader::builder::ConfigLoader::new()
        .with_username("admin".to_string())
        .with_password("changeme".to_string())
        .with_url("https://splunk.example.com:8089/services/search/jobs".to_string())
}
