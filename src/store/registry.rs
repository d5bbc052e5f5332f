// src/store/registry.rs

use crate::store::cart_store::CartStore;
use crate::store::storage::CartStorage;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Hands out one `CartStore` per user scope, all backed by the same storage.
/// Keying slots by user id keeps one account's cart from leaking into the
/// next after an account switch.
pub struct CartRegistry {
  storage: Arc<dyn CartStorage>,
  stores: Mutex<HashMap<String, Arc<CartStore>>>,
}

impl CartRegistry {
  pub fn new(storage: Arc<dyn CartStorage>) -> Self {
    Self {
      storage,
      stores: Mutex::new(HashMap::new()),
    }
  }

  pub fn for_user(&self, user_id: &str) -> Arc<CartStore> {
    let mut stores = self.stores.lock();
    stores
      .entry(user_id.to_string())
      .or_insert_with(|| Arc::new(CartStore::new(user_id, self.storage.clone())))
      .clone()
  }
}
