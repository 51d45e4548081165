//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::auth::{
    errors::AuthServiceError,
    identity::{IdentityClient, IdentityError},
    models::UserUuid,
};

#[derive(Debug, Clone)]
pub struct IdentityAuthService {
    identity: IdentityClient,
}

impl IdentityAuthService {
    #[must_use]
    pub fn new(identity: IdentityClient) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl AuthService for IdentityAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        let identity = self
            .identity
            .verify_session(bearer_token)
            .await
            .map_err(|error| match error {
                IdentityError::SessionNotFound => AuthServiceError::NotFound,
                other => AuthServiceError::Identity(other),
            })?;

        Ok(identity.user_uuid)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the user it authenticates.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}
