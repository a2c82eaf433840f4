//! Credential types for the Splunk search alert configuration.
//!
//! Responsibilities:
//! - Hold the username/password pair shared by both execution paths.
//!
//! Does NOT handle:
//! - Encoding credentials for HTTP (basic auth and session login live in the client crate).
//!
//! Invariants:
//! - The password is a `secrecy::SecretString` and never appears in `Debug` output.

use secrecy::SecretString;

/// Username and password used for basic auth and for the session login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}
