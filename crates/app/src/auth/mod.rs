//! Authentication
//!
//! The identity provider is an opaque HTTP collaborator: it decides whether
//! a session token is valid, this module only carries the resulting user id
//! to attach to created orders.

mod errors;
pub mod identity;
mod models;
mod service;

pub use errors::*;
pub use identity::{IdentityClient, IdentityConfig, IdentityError};
pub use models::*;
pub use service::*;
