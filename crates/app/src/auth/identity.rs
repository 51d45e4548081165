//! Identity provider client for session verification.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::models::UserUuid;

/// Configuration for connecting to the identity provider.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Identity provider address, e.g. `"http://localhost:7400"`.
    pub addr: String,

    /// Service API key for the verification endpoint.
    pub api_key: String,
}

/// The identity behind a verified session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_uuid: UserUuid,
}

/// HTTP client for the identity provider's session verification endpoint.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    config: IdentityConfig,
    http: Client,
}

impl IdentityClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Resolve a session token to the user behind it.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::SessionNotFound`] for unknown or expired
    /// sessions, and an error on HTTP failure or an unexpected response
    /// body.
    pub async fn verify_session(&self, token: &str) -> Result<SessionIdentity, IdentityError> {
        let url = format!("{}/v1/sessions/verify", self.config.addr);

        let body = serde_json::json!({ "session_token": token });

        let response = self
            .http
            .post(&url)
            .header("X-Api-Key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(IdentityError::SessionNotFound);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(IdentityError::UnexpectedResponse(format!(
                "session verification failed with status {status}: {text}"
            )));
        }

        let parsed: VerifySessionResponse = response.json().await?;

        Ok(SessionIdentity {
            user_uuid: parsed.user_uuid.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct VerifySessionResponse {
    user_uuid: Uuid,
}

/// Errors that can occur when communicating with the identity provider.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider does not know the session (unknown or expired).
    #[error("session not found")]
    SessionNotFound,

    /// The provider returned a non-2xx response or unexpected body.
    #[error("unexpected response from identity provider: {0}")]
    UnexpectedResponse(String),
}
