use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use materials_core::EntityKind;
use materials_products::{NewProduct, ProductId};

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/:id", get(get_product))
}

/// Create a product. The referenced vendor must already exist (400 otherwise).
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> axum::response::Response {
    let new = match dto::parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.create_product(new) {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::dependent_create_error_to_response(e, EntityKind::Vendor),
    }
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    common::listed(services.list_products())
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match common::parse_id(id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    common::found(services.get_product(&id))
}
