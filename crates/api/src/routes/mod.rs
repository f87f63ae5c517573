//! API route definitions.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;
use ishrakaat_shared::AppError;

pub mod faraid;
pub mod health;
pub mod zakah;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(zakah::routes())
        .merge(faraid::routes())
}

/// Renders an `AppError` as `{ "error": CODE, "message": text }`.
pub fn error_response(error: &AppError) -> Response {
    let status = StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    (
        status,
        Json(json!({
            "error": error.error_code(),
            "message": error.to_string(),
        })),
    )
        .into_response()
}

/// Unwraps a JSON body, turning a malformed one into a validation error.
pub(crate) fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| error_response(&AppError::validation(rejection.body_text())))
}
