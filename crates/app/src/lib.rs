//! Shared application domain, provider clients and persistence modules.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod providers;

mod uuids;
