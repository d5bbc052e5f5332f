// src/main.rs

use relief_hub::config::AppConfig;
use relief_hub::services::{BackendGateway, HttpBackendGateway};
use relief_hub::state::AppState;
use relief_hub::store::{CartRegistry, JsonFileStorage};
use relief_hub::web::configure_app_routes;

use actix_web::{web as actix_data, App, HttpServer};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting relief-hub gateway...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // One outbound client shared by the proxy route and the backend gateway.
  let http = reqwest::Client::new();

  let storage = Arc::new(JsonFileStorage::new(app_config.cart_storage_dir.clone()));
  let carts = Arc::new(CartRegistry::new(storage));
  let backend: Arc<dyn BackendGateway> =
    Arc::new(HttpBackendGateway::new(http.clone(), app_config.backend_url.clone()));

  let app_state = AppState {
    config: app_config.clone(),
    carts,
    backend,
    http,
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
