// src/web/handlers/catalog_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::session::authorization_header;

// Catalog listings consumed by the request-draft form, relayed as-is.

#[instrument(name = "handler::list_items", skip(app_state, req))]
pub async fn list_items_handler(
  app_state: web::Data<AppState>,
  req: HttpRequest,
) -> Result<HttpResponse, AppError> {
  let items = app_state.backend.list_items(authorization_header(&req).as_deref()).await?;
  Ok(HttpResponse::Ok().json(json!({ "success": true, "data": items })))
}

#[instrument(name = "handler::list_shelters", skip(app_state, req))]
pub async fn list_shelters_handler(
  app_state: web::Data<AppState>,
  req: HttpRequest,
) -> Result<HttpResponse, AppError> {
  let shelters = app_state
    .backend
    .list_shelters(authorization_header(&req).as_deref())
    .await?;
  Ok(HttpResponse::Ok().json(json!({ "success": true, "data": shelters })))
}
