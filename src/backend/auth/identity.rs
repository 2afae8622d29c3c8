/**
 * Identity Provider Client
 *
 * The browser completes OAuth with the external identity provider and hands
 * the backend a short-lived session id. The backend exchanges that id for
 * the member's email and name with a single GET carrying `X-Session-ID`.
 */
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Upper bound on one session-data exchange
pub const IDENTITY_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the identity provider exchange
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The provider did not recognise the session id
    #[error("identity provider rejected the session id ({status})")]
    Rejected { status: u16 },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider replied without the expected fields
    #[error("malformed identity reply: {0}")]
    Malformed(String),
}

/// Identity returned by the provider
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProviderIdentity {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Client for the identity provider's session-data endpoint
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    session_url: String,
}

impl IdentityClient {
    pub fn new(session_url: impl Into<String>) -> Self {
        Self::with_timeout(session_url, IDENTITY_TIMEOUT)
    }

    pub fn with_timeout(session_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            session_url: session_url.into(),
        }
    }

    /// Exchange a provider session id for the member's identity
    pub async fn fetch_identity(&self, session_id: &str) -> Result<ProviderIdentity, IdentityError> {
        let response = self
            .http
            .get(&self.session_url)
            .header("X-Session-ID", session_id)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::Rejected {
                status: status.as_u16(),
            });
        }

        let identity: ProviderIdentity = response
            .json()
            .await
            .map_err(|e| IdentityError::Malformed(e.to_string()))?;

        if identity.email.trim().is_empty() {
            return Err(IdentityError::Malformed("empty email".to_string()));
        }
        Ok(identity)
    }
}
