//! Carts
//!
//! The cart is client-held state: it never reaches the server until
//! checkout, when the client submits (reference, quantity) pairs directly.

pub mod errors;
pub mod models;
pub mod storage;
pub mod store;
pub mod subtotal;

pub use errors::CartStoreError;
pub use models::{CartLine, CartState};
pub use storage::{CartStorage, FileCartStorage, MemoryCartStorage};
pub use store::CartStore;
pub use subtotal::subtotal;
