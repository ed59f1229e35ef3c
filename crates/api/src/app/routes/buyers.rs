use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    routing::{get, post},
};

use materials_parties::{NewBuyer, BuyerId};

use crate::app::dto;
use crate::app::routes::common;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_buyer).get(list_buyers))
        .route("/:id", get(get_buyer))
}

pub async fn create_buyer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewBuyer>, JsonRejection>,
) -> axum::response::Response {
    let new = match dto::parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    common::created(services.create_buyer(new))
}

pub async fn list_buyers(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    common::listed(services.list_buyers())
}

pub async fn get_buyer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: BuyerId = match common::parse_id(id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    common::found(services.get_buyer(&id))
}
