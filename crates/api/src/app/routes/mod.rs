use axum::Router;

pub mod buyers;
pub mod common;
pub mod inventory;
pub mod products;
pub mod sellers;
pub mod system;
pub mod vendors;

/// Router for the entity endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .nest("/sellers", sellers::router())
        .nest("/buyers", buyers::router())
        .nest("/vendors", vendors::router())
        .nest("/products", products::router())
        .nest("/inventory", inventory::router())
}
