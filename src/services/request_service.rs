// src/services/request_service.rs

use tracing::{info, instrument};

use crate::errors::{AppError, Result as AppResult};
use crate::models::{DraftItem, RequestDraft};
use crate::services::backend_gateway::BackendGateway;
use crate::store::CartStore;

/// Cart-drawer flow: submit the whole cart for one shelter with a mandatory
/// justification. Validation runs before any network call; the cart is
/// cleared only after the backend confirms success, so every failure leaves
/// a state the user can resubmit from. Exactly one attempt per call.
#[instrument(skip(gateway, cart, authorization), fields(shelter_id = %shelter_id))]
pub async fn submit_cart_request(
  gateway: &dyn BackendGateway,
  cart: &CartStore,
  shelter_id: &str,
  reason: &str,
  authorization: Option<&str>,
) -> AppResult<()> {
  if reason.trim().is_empty() {
    return Err(AppError::Validation(
      "A justification is required to submit a request.".to_string(),
    ));
  }

  let snapshot = cart.snapshot()?;
  if snapshot.is_empty() {
    return Err(AppError::Validation("The cart is empty.".to_string()));
  }

  let draft = RequestDraft::from_cart(&snapshot, shelter_id, Some(reason));
  draft.validate().map_err(AppError::Validation)?;

  gateway.submit_request(&draft, authorization).await?;

  info!(items = draft.items.len(), "Request submitted, clearing cart");
  cart.clear_cart()?;
  Ok(())
}

/// Standalone "needs" form: a single ad-hoc item, justification optional.
#[instrument(skip(gateway, authorization), fields(shelter_id = %shelter_id, item_id = %item_id))]
pub async fn submit_single_need(
  gateway: &dyn BackendGateway,
  shelter_id: &str,
  item_id: &str,
  quantity: u32,
  reason: Option<&str>,
  authorization: Option<&str>,
) -> AppResult<()> {
  if item_id.trim().is_empty() {
    return Err(AppError::Validation("An item must be selected.".to_string()));
  }

  let draft = RequestDraft {
    shelter_id: shelter_id.to_string(),
    items: vec![DraftItem {
      item_id: item_id.to_string(),
      quantity_requested: quantity,
    }],
    reason: reason.map(str::to_string),
  };
  draft.validate().map_err(AppError::Validation)?;

  gateway.submit_request(&draft, authorization).await?;
  Ok(())
}
