//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store + integrity service construction
//! - `routes/`: HTTP routes + handlers (one file per entity kind)
//! - `dto.rs`: request/response bodies that are not entity records
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/", get(routes::system::index))
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(services))
}
