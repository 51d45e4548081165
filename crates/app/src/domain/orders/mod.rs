//! Orders

pub mod errors;
pub mod models;
pub mod pricing;
pub mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use models::*;
pub use repository::{OrdersRepository, PgOrdersRepository};
pub use service::*;
