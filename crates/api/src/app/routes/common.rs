use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use materials_core::{DomainError, StoreResult};

use crate::app::errors;

/// 201 with the stored record, or the mapped store error.
pub fn created<T: Serialize>(res: StoreResult<T>) -> axum::response::Response {
    match res {
        Ok(rec) => (StatusCode::CREATED, Json(rec)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// 200 with the record, or the mapped store error.
pub fn found<T: Serialize>(res: StoreResult<T>) -> axum::response::Response {
    match res {
        Ok(rec) => (StatusCode::OK, Json(rec)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// 200 with a JSON array (order unspecified).
pub fn listed<T: Serialize>(items: Vec<T>) -> axum::response::Response {
    (StatusCode::OK, Json(items)).into_response()
}

/// Parse an id from a path segment.
pub fn parse_id<T>(raw: String) -> Result<T, axum::response::Response>
where
    T: TryFrom<String, Error = DomainError>,
{
    T::try_from(raw).map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string()))
}
