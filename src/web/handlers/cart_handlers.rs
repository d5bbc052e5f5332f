// src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::models::{cart::clamp_quantity, Cart, CartLine};
use crate::state::AppState;
use crate::web::session::SessionUser;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartPayload {
  pub item_id: String,
  pub item_name: String,
  pub unit: String,
  pub quantity: i64,
  pub max_available: u32,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityPayload {
  pub item_id: String,
  pub quantity: i64,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartPayload {
  pub item_id: String,
}

fn cart_response(cart: Cart) -> HttpResponse {
  let total_items = cart.total_items();
  HttpResponse::Ok().json(json!({
      "success": true,
      "totalItems": total_items,
      "cart": cart,
  }))
}

// --- Handlers ---

#[instrument(name = "handler::view_cart", skip(app_state, user), fields(user_id = %user.id))]
pub async fn view_cart_handler(
  app_state: web::Data<AppState>,
  user: SessionUser,
) -> Result<HttpResponse, AppError> {
  let store = app_state.carts.for_user(&user.id);
  Ok(cart_response(store.snapshot()?))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, payload, user),
    fields(user_id = %user.id, item_id = %payload.item_id, quantity = %payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AddToCartPayload>,
  user: SessionUser,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  let store = app_state.carts.for_user(&user.id);
  store.add_to_cart(CartLine {
    quantity: clamp_quantity(payload.quantity, payload.max_available),
    item_id: payload.item_id,
    item_name: payload.item_name,
    unit: payload.unit,
    max_available: payload.max_available,
  })?;
  Ok(cart_response(store.snapshot()?))
}

#[instrument(
    name = "handler::update_quantity",
    skip(app_state, payload, user),
    fields(user_id = %user.id, item_id = %payload.item_id, quantity = %payload.quantity)
)]
pub async fn update_quantity_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<UpdateQuantityPayload>,
  user: SessionUser,
) -> Result<HttpResponse, AppError> {
  let store = app_state.carts.for_user(&user.id);
  store.update_quantity(&payload.item_id, payload.quantity)?;
  Ok(cart_response(store.snapshot()?))
}

#[instrument(
    name = "handler::remove_from_cart",
    skip(app_state, payload, user),
    fields(user_id = %user.id, item_id = %payload.item_id)
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<RemoveFromCartPayload>,
  user: SessionUser,
) -> Result<HttpResponse, AppError> {
  let store = app_state.carts.for_user(&user.id);
  store.remove_from_cart(&payload.item_id)?;
  Ok(cart_response(store.snapshot()?))
}

#[instrument(name = "handler::clear_cart", skip(app_state, user), fields(user_id = %user.id))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  user: SessionUser,
) -> Result<HttpResponse, AppError> {
  let store = app_state.carts.for_user(&user.id);
  store.clear_cart()?;
  Ok(cart_response(store.snapshot()?))
}
