// src/web/handlers/proxy_handlers.rs

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::instrument;

use crate::services::proxy::{
  self, ProxyRequest, CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN,
};
use crate::state::AppState;
use crate::web::session::authorization_header;

fn cors(builder: &mut actix_web::HttpResponseBuilder) -> &mut actix_web::HttpResponseBuilder {
  builder
    .insert_header(CORS_ALLOW_ORIGIN)
    .insert_header(CORS_ALLOW_METHODS)
    .insert_header(CORS_ALLOW_HEADERS)
}

/// `OPTIONS /api/*`: 200 with the CORS headers, no body.
pub async fn preflight_handler() -> HttpResponse {
  cors(&mut HttpResponse::Ok()).finish()
}

/// Any other method on `/api/*`: forward to the backend origin and pass the
/// status and body back unmodified, with CORS headers added.
#[instrument(name = "handler::forward_api", skip(app_state, req, body), fields(path = %req.path()))]
pub async fn forward_api_handler(
  app_state: web::Data<AppState>,
  req: HttpRequest,
  body: web::Bytes,
) -> HttpResponse {
  let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
    .unwrap_or(reqwest::Method::GET);
  let proxied = ProxyRequest {
    method,
    path: req.match_info().query("tail").to_string(),
    query: req.query_string().to_string(),
    authorization: authorization_header(&req),
    body: if body.is_empty() {
      None
    } else {
      Some(String::from_utf8_lossy(&body).into_owned())
    },
  };

  let response = proxy::forward(&app_state.http, &app_state.config.backend_url, proxied).await;

  let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
  let mut builder = HttpResponse::build(status);
  builder.insert_header(("Content-Type", response.content_type));
  cors(&mut builder);
  builder.body(response.body)
}
