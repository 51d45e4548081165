//! Product Handlers

pub(crate) mod batch;
pub(crate) mod get;
pub(crate) mod search;
