// src/lib.rs

//! relief-hub: same-origin gateway for a disaster-relief shelter and
//! inventory backend.
//!
//! The crate owns the pieces of the request workflow that live on this side
//! of the wire:
//!  - A per-user request cart with durable storage and clamped quantities.
//!  - A submission service that turns a cart (or a single ad-hoc need) into
//!    a backend create-request call with client-side validation up front.
//!  - A read-only view model over backend request records, with derived
//!    status/urgency labels and cancel-while-pending support.
//!  - A stateless `/api/*` proxy that forwards browser traffic to the
//!    backend origin and centralizes CORS.
//!
//! All business authority (persistence, authorization, status transitions)
//! stays in the external backend; this crate never retries a failed call.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod web;

// --- Re-exports for the Public API ---

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
