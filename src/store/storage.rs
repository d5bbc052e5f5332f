// src/store/storage.rs

use crate::errors::{AppError, Result};
use crate::models::Cart;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Durable key-value slot for serialized carts. `load` distinguishes "slot
/// absent" (`Ok(None)`) from "slot present but empty cart" so the store can
/// hydrate correctly.
pub trait CartStorage: Send + Sync {
  fn load(&self, slot: &str) -> Result<Option<Cart>>;
  fn save(&self, slot: &str, cart: &Cart) -> Result<()>;
}

/// One JSON file per slot under a base directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
  dir: PathBuf,
}

impl JsonFileStorage {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  fn slot_path(&self, slot: &str) -> PathBuf {
    // Slot keys are user ids; keep the file name shell- and path-safe.
    let safe: String = slot
      .chars()
      .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
      .collect();
    self.dir.join(format!("cart-{}.json", safe))
  }
}

impl CartStorage for JsonFileStorage {
  fn load(&self, slot: &str) -> Result<Option<Cart>> {
    let path = self.slot_path(slot);
    let raw = match fs::read_to_string(&path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(AppError::Storage(format!("reading {}: {}", path.display(), e))),
    };
    let cart = serde_json::from_str(&raw)
      .map_err(|e| AppError::Storage(format!("parsing {}: {}", path.display(), e)))?;
    Ok(Some(cart))
  }

  fn save(&self, slot: &str, cart: &Cart) -> Result<()> {
    fs::create_dir_all(&self.dir).map_err(|e| AppError::Storage(format!("creating {}: {}", self.dir.display(), e)))?;
    let path = self.slot_path(slot);
    let raw =
      serde_json::to_string(cart).map_err(|e| AppError::Storage(format!("serializing cart: {}", e)))?;
    fs::write(&path, raw).map_err(|e| AppError::Storage(format!("writing {}: {}", path.display(), e)))
  }
}
