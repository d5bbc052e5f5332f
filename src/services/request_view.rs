// src/services/request_view.rs

//! Read-model over backend request records: flat display rows with derived
//! labels, the "my history" projection, and pure client-side filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{RequestItem, RequestRecord, RequestStatus};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
  Urgent,
  Normal,
  Low,
}

/// Flat projection of one `RequestRecord` for listing. Derived on every
/// fetch and discarded on reload; never written back.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestDisplay {
  pub id: String,
  pub item_name: String,
  pub total_quantity: u32,
  pub shelter_name: String,
  pub status: RequestStatus,
  pub status_label: &'static str,
  pub urgency: Urgency,
  pub urgency_label: &'static str,
  /// Cancellation is offered only while pending; the backend stays the
  /// authority on whether it still goes through.
  pub can_cancel: bool,
  pub created_at: DateTime<Utc>,
  pub reason: Option<String>,
}

/// Exhaustive on purpose: a new backend status must be added here (and to
/// `RequestStatus`) before it can render.
pub fn status_label(status: RequestStatus) -> &'static str {
  match status {
    RequestStatus::Pending => "Pending approval",
    RequestStatus::Approved => "Approved",
    RequestStatus::Rejected => "Rejected",
    RequestStatus::Delivered => "Delivered",
    RequestStatus::Transferred => "Transferred",
  }
}

pub fn urgency_label(urgency: Urgency) -> &'static str {
  match urgency {
    Urgency::Urgent => "Urgent",
    Urgency::Normal => "Normal",
    Urgency::Low => "Low priority",
  }
}

/// Urgency is not a backend field; it is inferred from keywords in the
/// justification text and defaults to normal.
pub fn infer_urgency(reason: Option<&str>) -> Urgency {
  let Some(reason) = reason else {
    return Urgency::Normal;
  };
  let lowered = reason.to_lowercase();
  if ["urgent", "emergency", "critical", "asap", "immediately"]
    .iter()
    .any(|kw| lowered.contains(kw))
  {
    Urgency::Urgent
  } else if ["no rush", "whenever", "low priority"].iter().any(|kw| lowered.contains(kw)) {
    Urgency::Low
  } else {
    Urgency::Normal
  }
}

/// One item shows its catalog name; several collapse to
/// `"<first> and <N-1> more"`.
pub fn display_item_name(items: &[RequestItem]) -> String {
  match items {
    [] => String::new(),
    [only] => only.item_id.name.clone(),
    [first, rest @ ..] => format!("{} and {} more", first.item_id.name, rest.len()),
  }
}

pub fn to_display(record: &RequestRecord) -> RequestDisplay {
  let urgency = infer_urgency(record.reason.as_deref());
  RequestDisplay {
    id: record.id.clone(),
    item_name: display_item_name(&record.items),
    total_quantity: record.items.iter().map(|i| i.quantity_requested).sum(),
    shelter_name: record.shelter_id.name.clone(),
    status: record.status,
    status_label: status_label(record.status),
    urgency,
    urgency_label: urgency_label(urgency),
    can_cancel: record.status == RequestStatus::Pending,
    created_at: record.created_at,
    reason: record.reason.clone(),
  }
}

/// "My history": requests raised by this session's user (matched by id or
/// email, the backend may return everything visible to the role), most
/// recent first.
pub fn my_history(records: &[RequestRecord], user_id: &str, user_email: &str) -> Vec<RequestDisplay> {
  let mut displays: Vec<RequestDisplay> = records
    .iter()
    .filter(|r| r.requested_by.id == user_id || (!user_email.is_empty() && r.requested_by.email == user_email))
    .map(to_display)
    .collect();
  displays.sort_by(|a, b| b.created_at.cmp(&a.created_at));
  displays
}

/// Client-side filters; pure derived views recomputed from the full fetched
/// set, never mutating it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestFilter {
  pub status: Option<RequestStatus>,
  /// Case-insensitive substring over item name and shelter name.
  pub search: Option<String>,
}

pub fn apply_filter(displays: &[RequestDisplay], filter: &RequestFilter) -> Vec<RequestDisplay> {
  let needle = filter.search.as_deref().map(str::to_lowercase);
  displays
    .iter()
    .filter(|d| filter.status.map_or(true, |s| d.status == s))
    .filter(|d| {
      needle.as_deref().map_or(true, |n| {
        d.item_name.to_lowercase().contains(n) || d.shelter_name.to_lowercase().contains(n)
      })
    })
    .cloned()
    .collect()
}
