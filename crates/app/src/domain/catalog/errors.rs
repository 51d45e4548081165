//! Catalog service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Neither a failed transport nor a schema mismatch: the provider
    /// answered and has no such product.
    #[error("product not found")]
    NotFound,
}
