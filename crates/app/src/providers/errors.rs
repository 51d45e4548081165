//! Provider payload errors.

use thiserror::Error;

use crate::domain::catalog::Origin;

/// A provider response body that does not match the provider's schema.
///
/// Carried as structured diagnostics so the adapter can log which origin
/// produced the mismatch before degrading to an empty result.
#[derive(Debug, Error)]
#[error("{origin} provider payload does not match schema")]
pub struct ProviderPayloadError {
    /// Which catalog produced the payload.
    pub origin: Origin,

    /// The underlying decode failure.
    #[source]
    pub source: serde_json::Error,
}
