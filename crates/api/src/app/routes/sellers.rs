use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    routing::{get, post},
};

use materials_parties::{NewSeller, SellerId};

use crate::app::dto;
use crate::app::routes::common;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_seller).get(list_sellers))
        .route("/:id", get(get_seller))
}

pub async fn create_seller(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewSeller>, JsonRejection>,
) -> axum::response::Response {
    let new = match dto::parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    common::created(services.create_seller(new))
}

pub async fn list_sellers(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    common::listed(services.list_sellers())
}

pub async fn get_seller(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SellerId = match common::parse_id(id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    common::found(services.get_seller(&id))
}
