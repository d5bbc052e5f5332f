// src/store/mod.rs

//! Durable, per-user cart state.
//!
//! The in-memory cart is always authoritative for the current session; the
//! storage slot is a trailing side effect written after every mutation. A
//! store starts `Unloaded` and reads its slot before the first mutation, so
//! a fresh mount can never overwrite a previously saved non-empty cart with
//! an empty one.

pub mod cart_store;
pub mod registry;
pub mod storage;

pub use cart_store::CartStore;
pub use registry::CartRegistry;
pub use storage::{CartStorage, JsonFileStorage};
