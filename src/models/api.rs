// src/models/api.rs

use serde::{Deserialize, Serialize};

/// The backend's uniform response envelope: `{ success, message?, data? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
  pub success: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
}
