// src/web/handlers/request_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::request_service;
use crate::services::request_view::{self, RequestFilter};
use crate::state::AppState;
use crate::web::session::{authorization_header, SessionUser};

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCartPayload {
  pub shelter_id: String,
  pub reason: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitNeedPayload {
  pub shelter_id: String,
  pub item_id: String,
  pub quantity: u32,
  #[serde(default)]
  pub reason: Option<String>,
}

// --- Handlers ---

/// Cart-drawer submit. On success the user's cart is cleared (the drawer
/// closes caller-side); on any failure the cart is left untouched.
#[instrument(
    name = "handler::submit_request",
    skip(app_state, payload, user, req),
    fields(user_id = %user.id, shelter_id = %payload.shelter_id)
)]
pub async fn submit_request_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<SubmitCartPayload>,
  user: SessionUser,
  req: HttpRequest,
) -> Result<HttpResponse, AppError> {
  let store = app_state.carts.for_user(&user.id);
  request_service::submit_cart_request(
    app_state.backend.as_ref(),
    &store,
    &payload.shelter_id,
    &payload.reason,
    authorization_header(&req).as_deref(),
  )
  .await?;

  info!("Request submitted for user {}", user.id);
  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Request submitted successfully.",
  })))
}

/// Standalone single-item "needs" form; does not involve the cart.
#[instrument(
    name = "handler::submit_need",
    skip(app_state, payload, user, req),
    fields(user_id = %user.id, shelter_id = %payload.shelter_id, item_id = %payload.item_id)
)]
pub async fn submit_need_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<SubmitNeedPayload>,
  user: SessionUser,
  req: HttpRequest,
) -> Result<HttpResponse, AppError> {
  request_service::submit_single_need(
    app_state.backend.as_ref(),
    &payload.shelter_id,
    &payload.item_id,
    payload.quantity,
    payload.reason.as_deref(),
    authorization_header(&req).as_deref(),
  )
  .await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Request submitted successfully.",
  })))
}

/// "My history": this user's requests, most recent first, with optional
/// `status` and `search` query filters applied over the fetched set.
#[instrument(name = "handler::list_requests", skip(app_state, user, req, filter), fields(user_id = %user.id))]
pub async fn list_requests_handler(
  app_state: web::Data<AppState>,
  user: SessionUser,
  filter: web::Query<RequestFilter>,
  req: HttpRequest,
) -> Result<HttpResponse, AppError> {
  let records = app_state
    .backend
    .list_requests(authorization_header(&req).as_deref())
    .await?;
  let history = request_view::my_history(&records, &user.id, &user.email);
  let filtered = request_view::apply_filter(&history, &filter);

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "data": filtered,
  })))
}

/// Cancel-if-pending. The backend is the sole authority: if the request has
/// since transitioned, its failure message is surfaced verbatim.
#[instrument(name = "handler::cancel_request", skip(app_state, user, req), fields(user_id = %user.id))]
pub async fn cancel_request_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  user: SessionUser,
  req: HttpRequest,
) -> Result<HttpResponse, AppError> {
  let request_id = path.into_inner();
  app_state
    .backend
    .cancel_request(&request_id, authorization_header(&req).as_deref())
    .await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Request cancelled.",
  })))
}
