//! Catalog

pub mod errors;
pub mod models;
pub mod reference;
pub mod service;

pub use errors::CatalogError;
pub use models::{Origin, Product, UnknownOrigin};
pub use reference::{ParseRefError, ProductRef};
pub use service::*;
