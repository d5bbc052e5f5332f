// tests/submission_tests.rs
mod common;

use common::*;
use std::sync::Arc;

use relief_hub::errors::AppError;
use relief_hub::services::request_service::{submit_cart_request, submit_single_need};
use relief_hub::store::CartStore;

fn cart_with_water() -> (Arc<MemoryStorage>, CartStore) {
  let storage = Arc::new(MemoryStorage::default());
  let store = CartStore::new("user-1", storage.clone());
  store.add_to_cart(line("water", 3, 10)).unwrap();
  (storage, store)
}

#[tokio::test]
async fn test_empty_cart_is_rejected_before_any_network_call() {
  setup_tracing();
  let gateway = StubGateway::succeeding();
  let storage = Arc::new(MemoryStorage::default());
  let store = CartStore::new("user-1", storage);

  let result = submit_cart_request(&gateway, &store, "shelter-1", "shortage", None).await;

  assert!(matches!(result, Err(AppError::Validation(_))));
  assert_eq!(gateway.submit_calls(), 0);
}

#[tokio::test]
async fn test_empty_reason_is_rejected_before_any_network_call() {
  setup_tracing();
  let gateway = StubGateway::succeeding();
  let (_, store) = cart_with_water();

  let result = submit_cart_request(&gateway, &store, "shelter-1", "   ", None).await;

  assert!(matches!(result, Err(AppError::Validation(_))));
  assert_eq!(gateway.submit_calls(), 0);
  assert_eq!(store.get_total_items().unwrap(), 1);
}

#[tokio::test]
async fn test_missing_shelter_is_rejected_before_any_network_call() {
  setup_tracing();
  let gateway = StubGateway::succeeding();
  let (_, store) = cart_with_water();

  let result = submit_cart_request(&gateway, &store, "", "shortage", None).await;

  assert!(matches!(result, Err(AppError::Validation(_))));
  assert_eq!(gateway.submit_calls(), 0);
}

#[tokio::test]
async fn test_successful_submit_sends_the_cart_and_clears_it() {
  setup_tracing();
  let gateway = StubGateway::succeeding();
  let (storage, store) = cart_with_water();

  submit_cart_request(&gateway, &store, "shelter-1", "shortage", None)
    .await
    .unwrap();

  // Exactly one attempt, carrying the cart contents.
  assert_eq!(gateway.submit_calls(), 1);
  let draft = gateway.submitted.lock()[0].clone();
  assert_eq!(draft.shelter_id, "shelter-1");
  assert_eq!(draft.items.len(), 1);
  assert_eq!(draft.items[0].item_id, "water");
  assert_eq!(draft.items[0].quantity_requested, 3);
  assert_eq!(draft.reason.as_deref(), Some("shortage"));

  // Cart cleared, including the persisted slot.
  assert_eq!(store.get_total_items().unwrap(), 0);
  assert!(storage.stored("user-1").unwrap().is_empty());
}

#[tokio::test]
async fn test_backend_rejection_keeps_cart_and_message_verbatim() {
  setup_tracing();
  let gateway = StubGateway::rejecting("out of stock");
  let (_, store) = cart_with_water();

  let result = submit_cart_request(&gateway, &store, "shelter-1", "shortage", None).await;

  match result {
    Err(AppError::BackendRejected(message)) => assert_eq!(message, "out of stock"),
    other => panic!("expected BackendRejected, got {:?}", other),
  }
  // No partial mutation: the user can correct and resubmit.
  let cart = store.snapshot().unwrap();
  assert_eq!(cart.lines.len(), 1);
  assert_eq!(cart.lines[0].quantity, 3);
}

#[tokio::test]
async fn test_connection_failure_keeps_cart_intact() {
  setup_tracing();
  let gateway = StubGateway::unreachable_backend();
  let (_, store) = cart_with_water();

  let result = submit_cart_request(&gateway, &store, "shelter-1", "shortage", None).await;

  assert!(matches!(result, Err(AppError::Connection)));
  assert_eq!(gateway.submit_calls(), 1); // one attempt, no retry
  assert_eq!(store.get_total_items().unwrap(), 1);
}

#[tokio::test]
async fn test_needs_form_submits_a_single_item_without_a_reason() {
  setup_tracing();
  let gateway = StubGateway::succeeding();

  submit_single_need(&gateway, "shelter-1", "water", 2, None, None)
    .await
    .unwrap();

  let draft = gateway.submitted.lock()[0].clone();
  assert_eq!(draft.items.len(), 1);
  assert_eq!(draft.items[0].quantity_requested, 2);
  assert_eq!(draft.reason, None);
}

#[tokio::test]
async fn test_needs_form_requires_shelter_item_and_positive_quantity() {
  setup_tracing();
  let gateway = StubGateway::succeeding();

  let no_shelter = submit_single_need(&gateway, " ", "water", 2, None, None).await;
  assert!(matches!(no_shelter, Err(AppError::Validation(_))));

  let no_item = submit_single_need(&gateway, "shelter-1", "", 2, None, None).await;
  assert!(matches!(no_item, Err(AppError::Validation(_))));

  let zero_quantity = submit_single_need(&gateway, "shelter-1", "water", 0, None, None).await;
  assert!(matches!(zero_quantity, Err(AppError::Validation(_))));

  assert_eq!(gateway.submit_calls(), 0);
}
