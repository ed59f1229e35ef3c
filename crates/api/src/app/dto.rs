use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use crate::app::errors;

/// Body returned by successful commands that have no record to echo back.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Unwrap a JSON body, turning extractor rejections into a 400 response.
pub fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, axum::response::Response> {
    match body {
        Ok(Json(v)) => Ok(v),
        Err(rejection) => Err(errors::invalid_body(rejection.body_text())),
    }
}
