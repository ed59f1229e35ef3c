use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use materials_core::EntityKind;
use materials_inventory::{InventoryItemId, NewInventoryItem, QuantityUpdate};

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_item).get(list_items))
        // Static segment; takes priority over `/:id`.
        .route("/update", post(update_quantity))
        .route("/:id", get(get_item))
}

/// Create an inventory item. The referenced product must already exist (400 otherwise).
pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewInventoryItem>, JsonRejection>,
) -> axum::response::Response {
    let new = match dto::parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.create_inventory_item(new) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::dependent_create_error_to_response(e, EntityKind::Product),
    }
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    common::listed(services.list_inventory_items())
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: InventoryItemId = match common::parse_id(id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    common::found(services.get_inventory_item(&id))
}

pub async fn update_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<QuantityUpdate>, JsonRejection>,
) -> axum::response::Response {
    let update = match dto::parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.update_inventory_quantity(&update.id, update.quantity) {
        Ok(()) => (
            StatusCode::OK,
            Json(dto::MessageResponse {
                message: "Quantity updated successfully",
            }),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
