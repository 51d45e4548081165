//! Storefront domain modules.

pub mod carts;
pub mod catalog;
pub mod orders;
