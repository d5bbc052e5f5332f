// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::services::backend_gateway::ServiceError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// The backend answered with `{success: false, message}`; the message is
  /// carried verbatim so callers can show it unchanged.
  #[error("Backend rejected the request: {0}")]
  BackendRejected(String),

  /// Transport-level failure talking to the backend (or a response we could
  /// not parse). Collapsed into one generic variant on purpose.
  #[error("Could not reach the relief backend")]
  Connection,

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Cart Storage Error: {0}")]
  Storage(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<ServiceError> for AppError {
  fn from(err: ServiceError) -> Self {
    match err {
      ServiceError::Rejected(message) => AppError::BackendRejected(message),
      ServiceError::Connection => AppError::Connection,
    }
  }
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in handlers that use `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"success": false, "message": m})),
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({"success": false, "message": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"success": false, "message": m})),
      AppError::BackendRejected(m) => HttpResponse::BadRequest().json(json!({"success": false, "message": m})),
      AppError::Connection => {
        HttpResponse::BadGateway().json(json!({"success": false, "message": self.to_string()}))
      }
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"success": false, "message": "Configuration issue", "detail": m}))
      }
      AppError::Storage(m) => {
        HttpResponse::InternalServerError().json(json!({"success": false, "message": "Cart storage failed", "detail": m}))
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"success": false, "message": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
