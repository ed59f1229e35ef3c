use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    routing::{get, post},
};

use materials_parties::{NewVendor, VendorId};

use crate::app::dto;
use crate::app::routes::common;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_vendor).get(list_vendors))
        .route("/:id", get(get_vendor))
}

pub async fn create_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewVendor>, JsonRejection>,
) -> axum::response::Response {
    let new = match dto::parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    common::created(services.create_vendor(new))
}

pub async fn list_vendors(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    common::listed(services.list_vendors())
}

pub async fn get_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: VendorId = match common::parse_id(id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    common::found(services.get_vendor(&id))
}
