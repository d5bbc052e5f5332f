// src/services/proxy.rs

//! Stateless pass-through to the backend origin. The forward itself is a
//! plain function over (method, path, query, authorization, body) so it can
//! be exercised without an HTTP server in the loop; the actix wiring lives
//! in `web::handlers::proxy_handlers`.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tracing::{instrument, warn};

// Permissive CORS, added to every proxied response and to preflights.
pub const CORS_ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
pub const CORS_ALLOW_METHODS: (&str, &str) = ("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS");
pub const CORS_ALLOW_HEADERS: (&str, &str) = ("Access-Control-Allow-Headers", "Content-Type, Authorization");

/// Fixed body returned when the forward call itself cannot be made. No
/// further distinction between failure causes.
pub const FORWARD_FAILURE_BODY: &str = r#"{"success":false,"message":"Proxy error: Failed to connect to backend"}"#;
pub const FORWARD_FAILURE_STATUS: u16 = 500;

#[derive(Debug, Clone)]
pub struct ProxyRequest {
  pub method: Method,
  /// Sub-path under `/api/`, without a leading slash.
  pub path: String,
  /// Raw query string, possibly empty.
  pub query: String,
  /// Forwarded verbatim when present; no other request header is forwarded.
  pub authorization: Option<String>,
  /// Raw body text; ignored for GET/HEAD.
  pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProxyResponse {
  pub status: u16,
  pub content_type: String,
  pub body: Vec<u8>,
}

impl ProxyResponse {
  fn forward_failure() -> Self {
    Self {
      status: FORWARD_FAILURE_STATUS,
      content_type: "application/json".to_string(),
      body: FORWARD_FAILURE_BODY.as_bytes().to_vec(),
    }
  }
}

/// `<backend-origin>/api/<subpath><original-query-string>`.
pub fn build_target_url(backend_origin: &str, path: &str, query: &str) -> String {
  let mut url = format!("{}/api/{}", backend_origin.trim_end_matches('/'), path);
  if !query.is_empty() {
    url.push('?');
    url.push_str(query);
  }
  url
}

/// Forward one request and hand back the backend's status and body
/// unmodified. Never fails: an unreachable backend yields the fixed 500.
#[instrument(skip(client, request), fields(method = %request.method, path = %request.path))]
pub async fn forward(client: &reqwest::Client, backend_origin: &str, request: ProxyRequest) -> ProxyResponse {
  let url = build_target_url(backend_origin, &request.path, &request.query);

  let mut builder = client
    .request(request.method.clone(), &url)
    .header(CONTENT_TYPE, "application/json");
  if let Some(auth) = &request.authorization {
    builder = builder.header(AUTHORIZATION, auth);
  }
  if request.method != Method::GET && request.method != Method::HEAD {
    if let Some(body) = request.body {
      builder = builder.body(body);
    }
  }

  let response = match builder.send().await {
    Ok(response) => response,
    Err(e) => {
      warn!(error = %e, %url, "Proxy forward failed");
      return ProxyResponse::forward_failure();
    }
  };

  let status = response.status().as_u16();
  let content_type = response
    .headers()
    .get(CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .unwrap_or("text/plain")
    .to_string();
  match response.bytes().await {
    Ok(body) => ProxyResponse {
      status,
      content_type,
      body: body.to_vec(),
    },
    Err(e) => {
      warn!(error = %e, %url, "Proxy forward failed while reading the response body");
      ProxyResponse::forward_failure()
    }
  }
}
