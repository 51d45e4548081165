//! Auth Models

use crate::uuids::TypedUuid;

/// Marker for user-typed UUIDs.
#[derive(Debug, Clone, Copy)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;
