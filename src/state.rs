// src/state.rs

use crate::config::AppConfig;
use crate::services::backend_gateway::BackendGateway;
use crate::store::CartRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  /// Per-user cart stores, keyed by session user id.
  pub carts: Arc<CartRegistry>,
  pub backend: Arc<dyn BackendGateway>,
  /// Shared outbound client, reused by the proxy route for connection pooling.
  pub http: reqwest::Client,
}
