//! Session key storage for the session-authenticated client.

use secrecy::{ExposeSecret, SecretString};
use splunk_config::Credentials;

/// Holds the login credentials and, once logged in, the session key.
///
/// Splunk session keys are sent as `Authorization: Splunk <key>`.
#[derive(Debug)]
pub struct SessionManager {
    credentials: Credentials,
    session_key: Option<SecretString>,
}

impl SessionManager {
    /// Create a session manager that has not logged in yet.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            session_key: None,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Store the key returned by the login endpoint and return its header value.
    pub fn set_session_key(&mut self, key: String) -> String {
        let header = format!("Splunk {}", key);
        self.session_key = Some(SecretString::new(key.into()));
        header
    }

    pub fn has_session(&self) -> bool {
        self.session_key.is_some()
    }

    /// Value for the `Authorization` header, if logged in.
    pub fn authorization_header(&self) -> Option<String> {
        self.session_key
            .as_ref()
            .map(|key| format!("Splunk {}", key.expose_secret()))
    }
}
