//! Cart store errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartStoreError {
    /// Quantities must stay positive; callers wanting a line gone use
    /// `remove`.
    #[error("quantity must be positive")]
    ZeroQuantity,

    /// The persisted document could not be decoded.
    #[error("persisted cart state is corrupt")]
    Corrupt(#[source] serde_json::Error),

    /// The cart state could not be encoded for persistence.
    #[error("failed to encode cart state")]
    Encode(#[source] serde_json::Error),

    /// The storage backend failed to load or save the document.
    #[error("cart storage error")]
    Storage(#[from] io::Error),
}
