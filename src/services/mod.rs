// src/services/mod.rs

//! Service layer: the backend gateway, the submission flow, the request
//! view model, and the stateless proxy forward.

pub mod backend_gateway;
pub mod proxy;
pub mod request_service;
pub mod request_view;

pub use backend_gateway::{BackendGateway, HttpBackendGateway, ServiceError, ServiceResult};
