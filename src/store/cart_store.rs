// src/store/cart_store.rs

use crate::errors::Result;
use crate::models::{Cart, CartLine};
use crate::store::storage::CartStorage;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::instrument;

/// Tri-state hydration: `Unloaded` means the storage slot has not been read
/// yet, which is distinct from "loaded and empty".
enum CartState {
  Unloaded,
  Loaded(Cart),
}

type CartObserver = Box<dyn Fn(&Cart) + Send + Sync>;

/// Session-global cart for one user scope. Mutations go through the defined
/// operations only; every mutation persists the new state and then notifies
/// all subscribed observers synchronously, in issue order.
pub struct CartStore {
  slot: String,
  storage: Arc<dyn CartStorage>,
  state: Mutex<CartState>,
  observers: Mutex<Vec<CartObserver>>,
}

impl CartStore {
  pub fn new(slot: impl Into<String>, storage: Arc<dyn CartStorage>) -> Self {
    Self {
      slot: slot.into(),
      storage,
      state: Mutex::new(CartState::Unloaded),
      observers: Mutex::new(Vec::new()),
    }
  }

  /// Register an observer called with a snapshot after every mutation.
  /// Surfaces like the sidebar badge and the drawer each register one.
  pub fn subscribe(&self, observer: impl Fn(&Cart) + Send + Sync + 'static) {
    self.observers.lock().push(Box::new(observer));
  }

  /// Read the storage slot if that has not happened yet. Mutations call this
  /// first, so the first save can never clobber a previously stored cart.
  fn ensure_loaded(&self, state: &mut CartState) -> Result<()> {
    if let CartState::Unloaded = state {
      let cart = self.storage.load(&self.slot)?.unwrap_or_default();
      *state = CartState::Loaded(cart);
    }
    Ok(())
  }

  /// Run one mutation: hydrate if needed, apply, persist, notify.
  fn mutate<R>(&self, op: impl FnOnce(&mut Cart) -> R) -> Result<R> {
    let (result, snapshot) = {
      let mut state = self.state.lock();
      self.ensure_loaded(&mut state)?;
      let CartState::Loaded(cart) = &mut *state else {
        unreachable!("cart hydrated above");
      };
      let result = op(cart);
      self.storage.save(&self.slot, cart)?;
      (result, cart.clone())
    };
    for observer in self.observers.lock().iter() {
      observer(&snapshot);
    }
    Ok(result)
  }

  fn read<R>(&self, op: impl FnOnce(&Cart) -> R) -> Result<R> {
    let mut state = self.state.lock();
    self.ensure_loaded(&mut state)?;
    let CartState::Loaded(cart) = &*state else {
      unreachable!("cart hydrated above");
    };
    Ok(op(cart))
  }

  /// Merge-by-key add; always succeeds.
  #[instrument(skip(self, line), fields(slot = %self.slot, item_id = %line.item_id))]
  pub fn add_to_cart(&self, line: CartLine) -> Result<()> {
    self.mutate(|cart| cart.add(line))
  }

  /// No-op when the item is not in the cart.
  pub fn remove_from_cart(&self, item_id: &str) -> Result<()> {
    self.mutate(|cart| cart.remove(item_id))
  }

  /// Clamps into `[1, max_available]`; no-op when the item is absent.
  pub fn update_quantity(&self, item_id: &str, requested: i64) -> Result<()> {
    self.mutate(|cart| cart.update_quantity(item_id, requested))
  }

  pub fn clear_cart(&self) -> Result<()> {
    self.mutate(Cart::clear)
  }

  /// Count of distinct lines (badge display), not the sum of quantities.
  pub fn get_total_items(&self) -> Result<usize> {
    self.read(Cart::total_items)
  }

  pub fn snapshot(&self) -> Result<Cart> {
    self.read(Cart::clone)
  }
}
