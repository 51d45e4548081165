//! Authentication middleware.

pub(crate) mod middleware;
