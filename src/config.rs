// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Fallback backend origin when `BACKEND_URL` is unset.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Origin of the external relief backend. The proxy route and the backend
  /// gateway both target `{backend_url}/api/...`.
  pub backend_url: String,

  /// Directory holding the per-user persisted cart slots.
  pub cart_storage_dir: PathBuf,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    // Trailing slashes would otherwise double up when the /api path is appended.
    let backend_url = get_env("BACKEND_URL")
      .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
      .trim_end_matches('/')
      .to_string();

    let cart_storage_dir = get_env("CART_STORAGE_DIR")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from("data/carts"));

    tracing::info!(%backend_url, "Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      backend_url,
      cart_storage_dir,
    })
  }
}
