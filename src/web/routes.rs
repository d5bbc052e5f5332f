// src/web/routes.rs

use actix_web::http::Method;
use actix_web::web;

use crate::web::handlers::{cart_handlers, catalog_handlers, proxy_handlers, request_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  // UI-facing application surface
  cfg.service(
    web::scope("/app")
      .route("/health", web::get().to(health_check_handler))
      // Cart Routes
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::view_cart_handler))
          .route("/add", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/update", web::post().to(cart_handlers::update_quantity_handler))
          .route("/remove", web::post().to(cart_handlers::remove_from_cart_handler))
          .route("/clear", web::post().to(cart_handlers::clear_cart_handler)),
      )
      // Request Routes (history view, cart-drawer submit, cancel)
      .service(
        web::scope("/requests")
          .route("", web::get().to(request_handlers::list_requests_handler))
          .route("", web::post().to(request_handlers::submit_request_handler))
          .route(
            "/{request_id}/cancel",
            web::post().to(request_handlers::cancel_request_handler),
          ),
      )
      // Standalone single-item needs form
      .route("/needs", web::post().to(request_handlers::submit_need_handler))
      // Catalog listings for the draft form
      .service(
        web::scope("/catalog")
          .route("/items", web::get().to(catalog_handlers::list_items_handler))
          .route("/shelters", web::get().to(catalog_handlers::list_shelters_handler)),
      ),
  );

  // Same-origin relay to the backend. Preflights are answered locally; every
  // other method on any sub-path is forwarded.
  cfg.service(
    web::scope("/api")
      .route("/{tail:.*}", web::method(Method::OPTIONS).to(proxy_handlers::preflight_handler))
      .route("/{tail:.*}", web::route().to(proxy_handlers::forward_api_handler)),
  );
}
