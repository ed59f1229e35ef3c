use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use materials_core::{EntityKind, StoreError};

/// Map a store error from a plain get/create/update to an HTTP response.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match &err {
        StoreError::AlreadyExists { .. } => json_error(StatusCode::CONFLICT, "already_exists", err.to_string()),
        StoreError::NotFound { .. } => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
    }
}

/// Map an error from a create that carries a dependency check.
///
/// A missing dependency is a problem with the request body, not with the
/// resource being addressed, so it is reported as 400.
pub fn dependent_create_error_to_response(err: StoreError, dependency: EntityKind) -> axum::response::Response {
    match &err {
        StoreError::NotFound { kind, .. } if *kind == dependency => {
            json_error(StatusCode::BAD_REQUEST, "dependency_not_found", err.to_string())
        }
        _ => store_error_to_response(err),
    }
}

pub fn invalid_body(message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
