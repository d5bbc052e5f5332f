// src/web/handlers/mod.rs

pub mod cart_handlers;
pub mod catalog_handlers;
pub mod proxy_handlers;
pub mod request_handlers;
