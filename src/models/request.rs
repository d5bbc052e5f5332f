// src/models/request.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::cart::Cart;

// --- Outgoing draft ---

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DraftItem {
  pub item_id: String,
  pub quantity_requested: u32,
}

/// Payload for `POST /api/requests`. `reason` is required for the
/// cart-drawer flow and optional for the standalone single-item needs flow;
/// the submission service enforces the distinction.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestDraft {
  pub shelter_id: String,
  pub items: Vec<DraftItem>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reason: Option<String>,
}

impl RequestDraft {
  pub fn from_cart(cart: &Cart, shelter_id: &str, reason: Option<&str>) -> Self {
    Self {
      shelter_id: shelter_id.to_string(),
      items: cart
        .lines
        .iter()
        .map(|l| DraftItem {
          item_id: l.item_id.clone(),
          quantity_requested: l.quantity,
        })
        .collect(),
      reason: reason.map(str::to_string),
    }
  }

  /// Shared preconditions: shelter selected, at least one item, every
  /// quantity >= 1. Checked before any network call is attempted.
  pub fn validate(&self) -> Result<(), String> {
    if self.shelter_id.trim().is_empty() {
      return Err("A shelter must be selected before submitting a request.".to_string());
    }
    if self.items.is_empty() {
      return Err("The request must contain at least one item.".to_string());
    }
    if self.items.iter().any(|i| i.quantity_requested < 1) {
      return Err("Every requested quantity must be at least 1.".to_string());
    }
    Ok(())
  }
}

// --- Incoming backend records ---

/// Backend-owned request status. Kept closed and exhaustive so a new backend
/// status fails at decode instead of silently falling through to a default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
  Pending,
  Approved,
  Rejected,
  Delivered,
  Transferred,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemRef {
  pub name: String,
  pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelterRef {
  pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequesterRef {
  #[serde(rename = "_id")]
  pub id: String,
  pub email: String,
  pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestItem {
  /// The backend populates this reference with the item's catalog fields.
  pub item_id: ItemRef,
  pub quantity_requested: u32,
}

/// A request record as the backend returns it. Read-only on this side;
/// status transitions are backend-owned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
  #[serde(rename = "_id")]
  pub id: String,
  pub items: Vec<RequestItem>,
  pub shelter_id: ShelterRef,
  pub requested_by: RequesterRef,
  pub status: RequestStatus,
  pub created_at: DateTime<Utc>,
  #[serde(default)]
  pub reason: Option<String>,
}
