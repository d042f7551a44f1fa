//! JSON error payloads for the dashboard API.
//!
//! Every error body has the shape `{"status": <code>, "error": <message>}`.
//! Upstream failures collapse to a generic 500 so no internal detail leaks.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::warn;

use crate::error::DirectoryError;

/// An error response for the dashboard.
#[derive(Debug)]
pub struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) message: String,
}

impl ApiError {
    /// 404 with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Generic 500 for a failed upstream lookup.
    pub fn upstream() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "An error occurred, try again later!".to_string(),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        warn!("directory lookup failed: {err}");
        Self::upstream()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "status": self.status.as_u16(),
            "error": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[tokio::test]
    async fn not_found_body_shape() {
        let resp = ApiError::not_found("Could not find that user").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Could not find that user");
    }

    #[tokio::test]
    async fn upstream_body_is_generic() {
        let resp = ApiError::upstream().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 500);
        assert_eq!(body["error"], "An error occurred, try again later!");
    }
}
