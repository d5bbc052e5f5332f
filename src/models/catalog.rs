// src/models/catalog.rs

use serde::{Deserialize, Serialize};

/// Catalog item as listed by `GET /api/items`; `quantity` is current stock
/// and becomes a cart line's `max_available` at add-time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
  #[serde(rename = "_id")]
  pub id: String,
  pub name: String,
  pub unit: String,
  #[serde(default)]
  pub quantity: u32,
  #[serde(default)]
  pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Shelter {
  #[serde(rename = "_id")]
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub location: Option<String>,
}
