// src/web/session.rs

use actix_web::{FromRequest, HttpRequest};
use tracing::warn;

use crate::errors::AppError;

/// The current session's identity, as persisted by the login flow. Real
/// authentication lives in the backend; this extractor only carries the
/// identity headers along for cart scoping and the "my history" filter.
#[derive(Debug, Clone)]
pub struct SessionUser {
  pub id: String,
  pub email: String,
  pub name: Option<String>,
}

fn header_string(req: &HttpRequest, name: &str) -> Option<String> {
  req
    .headers()
    .get(name)
    .and_then(|v| v.to_str().ok())
    .map(str::to_string)
    .filter(|s| !s.is_empty())
}

impl FromRequest for SessionUser {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let Some(id) = header_string(req, "X-User-Id") else {
      warn!("SessionUser extractor: missing X-User-Id header.");
      return futures_util::future::ready(Err(AppError::Auth(
        "Sign in to use the request workflow.".to_string(),
      )));
    };
    futures_util::future::ready(Ok(SessionUser {
      id,
      email: header_string(req, "X-User-Email").unwrap_or_default(),
      name: header_string(req, "X-User-Name"),
    }))
  }
}

/// The raw `Authorization` header, forwarded verbatim to the backend.
pub fn authorization_header(req: &HttpRequest) -> Option<String> {
  header_string(req, "Authorization")
}
