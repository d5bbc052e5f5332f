// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use relief_hub::errors::Result as AppResult;
use relief_hub::models::request::{ItemRef, RequesterRef, ShelterRef};
use relief_hub::models::{Cart, CartLine, Item, RequestDraft, RequestItem, RequestRecord, RequestStatus, Shelter};
use relief_hub::services::backend_gateway::{BackendGateway, ServiceError, ServiceResult};
use relief_hub::store::CartStorage;

pub fn setup_tracing() {
  static INIT: Once = Once::new();
  INIT.call_once(|| {
    tracing_subscriber::fmt()
      .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
      .with_test_writer()
      .try_init()
      .ok();
  });
}

// --- Fixtures ---

pub fn line(item_id: &str, quantity: u32, max_available: u32) -> CartLine {
  CartLine {
    item_id: item_id.to_string(),
    item_name: format!("{} (name)", item_id),
    unit: "unit".to_string(),
    quantity,
    max_available,
  }
}

pub fn created_at(hour: u32) -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

pub struct RecordSpec<'a> {
  pub id: &'a str,
  pub items: &'a [(&'a str, u32)],
  pub shelter: &'a str,
  pub user_id: &'a str,
  pub email: &'a str,
  pub status: RequestStatus,
  pub hour: u32,
  pub reason: Option<&'a str>,
}

pub fn record(spec: RecordSpec<'_>) -> RequestRecord {
  RequestRecord {
    id: spec.id.to_string(),
    items: spec
      .items
      .iter()
      .map(|(name, qty)| RequestItem {
        item_id: ItemRef {
          name: name.to_string(),
          unit: "unit".to_string(),
        },
        quantity_requested: *qty,
      })
      .collect(),
    shelter_id: ShelterRef {
      name: spec.shelter.to_string(),
    },
    requested_by: RequesterRef {
      id: spec.user_id.to_string(),
      email: spec.email.to_string(),
      name: "Requester".to_string(),
    },
    status: spec.status,
    created_at: created_at(spec.hour),
    reason: spec.reason.map(str::to_string),
  }
}

// --- In-memory cart storage ---

#[derive(Default)]
pub struct MemoryStorage {
  pub slots: Mutex<HashMap<String, Cart>>,
  pub save_count: AtomicUsize,
}

impl MemoryStorage {
  pub fn seeded(slot: &str, cart: Cart) -> Self {
    let storage = Self::default();
    storage.slots.lock().insert(slot.to_string(), cart);
    storage
  }

  pub fn stored(&self, slot: &str) -> Option<Cart> {
    self.slots.lock().get(slot).cloned()
  }

  pub fn saves(&self) -> usize {
    self.save_count.load(Ordering::SeqCst)
  }
}

impl CartStorage for MemoryStorage {
  fn load(&self, slot: &str) -> AppResult<Option<Cart>> {
    Ok(self.slots.lock().get(slot).cloned())
  }

  fn save(&self, slot: &str, cart: &Cart) -> AppResult<()> {
    self.save_count.fetch_add(1, Ordering::SeqCst);
    self.slots.lock().insert(slot.to_string(), cart.clone());
    Ok(())
  }
}

// --- Stub backend gateway ---

pub struct StubGateway {
  pub submit_result: Mutex<ServiceResult<()>>,
  pub cancel_result: Mutex<ServiceResult<()>>,
  pub records: Mutex<Vec<RequestRecord>>,
  pub submitted: Mutex<Vec<RequestDraft>>,
  pub cancelled: Mutex<Vec<String>>,
}

impl StubGateway {
  pub fn succeeding() -> Self {
    Self {
      submit_result: Mutex::new(Ok(())),
      cancel_result: Mutex::new(Ok(())),
      records: Mutex::new(Vec::new()),
      submitted: Mutex::new(Vec::new()),
      cancelled: Mutex::new(Vec::new()),
    }
  }

  pub fn rejecting(message: &str) -> Self {
    let stub = Self::succeeding();
    *stub.submit_result.lock() = Err(ServiceError::Rejected(message.to_string()));
    *stub.cancel_result.lock() = Err(ServiceError::Rejected(message.to_string()));
    stub
  }

  pub fn unreachable_backend() -> Self {
    let stub = Self::succeeding();
    *stub.submit_result.lock() = Err(ServiceError::Connection);
    *stub.cancel_result.lock() = Err(ServiceError::Connection);
    stub
  }

  pub fn submit_calls(&self) -> usize {
    self.submitted.lock().len()
  }
}

#[async_trait]
impl BackendGateway for StubGateway {
  async fn submit_request(&self, draft: &RequestDraft, _authorization: Option<&str>) -> ServiceResult<()> {
    self.submitted.lock().push(draft.clone());
    self.submit_result.lock().clone()
  }

  async fn list_requests(&self, _authorization: Option<&str>) -> ServiceResult<Vec<RequestRecord>> {
    Ok(self.records.lock().clone())
  }

  async fn cancel_request(&self, request_id: &str, _authorization: Option<&str>) -> ServiceResult<()> {
    self.cancelled.lock().push(request_id.to_string());
    self.cancel_result.lock().clone()
  }

  async fn list_items(&self, _authorization: Option<&str>) -> ServiceResult<Vec<Item>> {
    Ok(Vec::new())
  }

  async fn list_shelters(&self, _authorization: Option<&str>) -> ServiceResult<Vec<Shelter>> {
    Ok(Vec::new())
  }
}
