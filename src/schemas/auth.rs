use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use thiserror::Error;

/// Rejection for the bearer-token extractor. Both variants map to the same
/// observable 401 body; the split keeps the presence check ahead of the
/// verification attempt.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header missing")]
    MissingToken,
    #[error("token did not verify")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Token Missing or invalid" })),
        )
            .into_response()
    }
}
