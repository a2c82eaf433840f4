//! Client-level session management helpers.
//!
//! # Invariants
//! - [`SplunkClient::login`] requires `&mut self` because it stores the session key
//! - Session-authenticated calls log in on demand when no key is held yet

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use secrecy::ExposeSecret;

impl SplunkClient {
    /// Login with username/password and keep the session key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`](crate::ClientError::AuthFailed) if Splunk rejects the credentials.
    /// Returns [`ClientError::InvalidResponse`](crate::ClientError::InvalidResponse) if the response has no session key.
    pub async fn login(&mut self) -> Result<()> {
        self.establish_session().await.map(|_| ())
    }

    pub fn is_logged_in(&self) -> bool {
        self.session_manager.has_session()
    }

    /// `Authorization` header value, logging in first if needed.
    pub(crate) async fn authorization(&mut self) -> Result<String> {
        match self.session_manager.authorization_header() {
            Some(header) => Ok(header),
            None => self.establish_session().await,
        }
    }

    /// Log in and return the `Authorization` header for the new session.
    async fn establish_session(&mut self) -> Result<String> {
        let credentials = self.session_manager.credentials();
        let key = endpoints::login(
            &self.http,
            &self.base_url,
            &credentials.username,
            credentials.password.expose_secret(),
        )
        .await?;

        let header = self.session_manager.set_session_key(key);
        tracing::debug!("Session established with {}", self.base_url);
        Ok(header)
    }
}
