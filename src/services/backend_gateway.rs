// src/services/backend_gateway.rs

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{instrument, warn};

use crate::models::{ApiEnvelope, Item, RequestDraft, RequestRecord, Shelter};

/// Typed outcome of a backend call. The caller decides how to render it;
/// the data layer never reports to the user directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
  /// The backend answered `{success: false, message}`; carried verbatim.
  #[error("{0}")]
  Rejected(String),

  /// Transport failure or a response body that could not be parsed.
  #[error("Could not reach the relief backend")]
  Connection,
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// The backend API this application consumes. A trait seam so the submission
/// service and the view model are testable without a live backend.
#[async_trait]
pub trait BackendGateway: Send + Sync {
  async fn submit_request(&self, draft: &RequestDraft, authorization: Option<&str>) -> ServiceResult<()>;
  async fn list_requests(&self, authorization: Option<&str>) -> ServiceResult<Vec<RequestRecord>>;
  async fn cancel_request(&self, request_id: &str, authorization: Option<&str>) -> ServiceResult<()>;
  async fn list_items(&self, authorization: Option<&str>) -> ServiceResult<Vec<Item>>;
  async fn list_shelters(&self, authorization: Option<&str>) -> ServiceResult<Vec<Shelter>>;
}

/// Unwrap the envelope: success yields its payload, failure carries the
/// backend's message through unchanged.
fn into_data<T>(envelope: ApiEnvelope<T>) -> ServiceResult<Option<T>> {
  if envelope.success {
    Ok(envelope.data)
  } else {
    Err(ServiceError::Rejected(
      envelope
        .message
        .unwrap_or_else(|| "The backend rejected the request.".to_string()),
    ))
  }
}

/// reqwest-backed gateway targeting `{base_url}/api/...`.
pub struct HttpBackendGateway {
  http: reqwest::Client,
  base_url: String,
}

impl HttpBackendGateway {
  pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
    Self {
      http,
      base_url: base_url.into(),
    }
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api/{}", self.base_url.trim_end_matches('/'), path)
  }

  /// Send a request and decode the `{success, message?, data?}` envelope.
  /// Transport and decode failures both collapse to `Connection`.
  async fn call<T: DeserializeOwned + Default>(&self, builder: reqwest::RequestBuilder) -> ServiceResult<ApiEnvelope<T>> {
    let response = builder.send().await.map_err(|e| {
      warn!(error = %e, "Backend call failed at transport level");
      ServiceError::Connection
    })?;
    response.json::<ApiEnvelope<T>>().await.map_err(|e| {
      warn!(error = %e, "Backend response could not be parsed");
      ServiceError::Connection
    })
  }

  fn with_auth(builder: reqwest::RequestBuilder, authorization: Option<&str>) -> reqwest::RequestBuilder {
    match authorization {
      Some(auth) => builder.header(reqwest::header::AUTHORIZATION, auth),
      None => builder,
    }
  }
}

#[async_trait]
impl BackendGateway for HttpBackendGateway {
  #[instrument(skip(self, draft, authorization), fields(shelter_id = %draft.shelter_id, items = draft.items.len()))]
  async fn submit_request(&self, draft: &RequestDraft, authorization: Option<&str>) -> ServiceResult<()> {
    let builder = Self::with_auth(self.http.post(self.url("requests")), authorization).json(draft);
    let envelope: ApiEnvelope<serde_json::Value> = self.call(builder).await?;
    into_data(envelope).map(|_| ())
  }

  #[instrument(skip(self, authorization))]
  async fn list_requests(&self, authorization: Option<&str>) -> ServiceResult<Vec<RequestRecord>> {
    let builder = Self::with_auth(self.http.get(self.url("requests")), authorization);
    let envelope: ApiEnvelope<Vec<RequestRecord>> = self.call(builder).await?;
    Ok(into_data(envelope)?.unwrap_or_default())
  }

  #[instrument(skip(self, authorization), fields(request_id = %request_id))]
  async fn cancel_request(&self, request_id: &str, authorization: Option<&str>) -> ServiceResult<()> {
    let builder = Self::with_auth(
      self.http.post(self.url(&format!("requests/{}/cancel", request_id))),
      authorization,
    );
    let envelope: ApiEnvelope<serde_json::Value> = self.call(builder).await?;
    into_data(envelope).map(|_| ())
  }

  #[instrument(skip(self, authorization))]
  async fn list_items(&self, authorization: Option<&str>) -> ServiceResult<Vec<Item>> {
    let builder = Self::with_auth(self.http.get(self.url("items")), authorization);
    let envelope: ApiEnvelope<Vec<Item>> = self.call(builder).await?;
    Ok(into_data(envelope)?.unwrap_or_default())
  }

  #[instrument(skip(self, authorization))]
  async fn list_shelters(&self, authorization: Option<&str>) -> ServiceResult<Vec<Shelter>> {
    let builder = Self::with_auth(self.http.get(self.url("shelters")), authorization);
    let envelope: ApiEnvelope<Vec<Shelter>> = self.call(builder).await?;
    Ok(into_data(envelope)?.unwrap_or_default())
  }
}
