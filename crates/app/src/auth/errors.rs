//! Auth service errors.

use thiserror::Error;

use crate::auth::IdentityError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("session not found")]
    NotFound,

    #[error("identity provider error")]
    Identity(#[source] IdentityError),
}
