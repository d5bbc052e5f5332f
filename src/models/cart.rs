// src/models/cart.rs

use serde::{Deserialize, Serialize};

/// One pending request line. `item_name`, `unit` and `max_available` are
/// captured at add-time from the catalog view and are not re-validated
/// against the catalog afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub item_id: String,
  pub item_name: String,
  pub unit: String,
  pub quantity: u32,
  pub max_available: u32,
}

/// Clamp a requested quantity into `[1, max_available]`. Out-of-range
/// requests (including zero and negative) are clamped, never rejected.
pub fn clamp_quantity(requested: i64, max_available: u32) -> u32 {
  requested.min(i64::from(max_available)).max(1) as u32
}

/// Ordered collection of cart lines, keyed by `item_id` (no duplicates;
/// adding an already-present item merges quantities instead of appending).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
  pub lines: Vec<CartLine>,
}

impl Cart {
  /// Merge-by-key add. An existing line keeps its position and gets
  /// `min(existing + added, max_available)`; a new line is appended with its
  /// quantity clamped into range.
  pub fn add(&mut self, mut line: CartLine) {
    match self.lines.iter_mut().find(|l| l.item_id == line.item_id) {
      Some(existing) => {
        let merged = existing.quantity.saturating_add(line.quantity);
        existing.quantity = merged.min(line.max_available);
        existing.max_available = line.max_available;
      }
      None => {
        line.quantity = clamp_quantity(i64::from(line.quantity), line.max_available);
        self.lines.push(line);
      }
    }
  }

  /// Removes the line if present; no-op otherwise.
  pub fn remove(&mut self, item_id: &str) {
    self.lines.retain(|l| l.item_id != item_id);
  }

  /// Sets the line's quantity to the clamped value; no-op when absent.
  pub fn update_quantity(&mut self, item_id: &str, requested: i64) {
    if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
      line.quantity = clamp_quantity(requested, line.max_available);
    }
  }

  pub fn clear(&mut self) {
    self.lines.clear();
  }

  /// Count of distinct lines, not the sum of quantities (badge display).
  pub fn total_items(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  pub fn get(&self, item_id: &str) -> Option<&CartLine> {
    self.lines.iter().find(|l| l.item_id == item_id)
  }
}
