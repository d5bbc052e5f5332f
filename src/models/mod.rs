// src/models/mod.rs

//! Data structures exchanged with the backend and held in the cart.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod request;

// Re-export the model structs for convenient access
pub use api::ApiEnvelope;
pub use cart::{Cart, CartLine};
pub use catalog::{Item, Shelter};
pub use request::{DraftItem, RequestDraft, RequestItem, RequestRecord, RequestStatus};
