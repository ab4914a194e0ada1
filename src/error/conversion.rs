/**
 * Error Conversion
 *
 * Converts `ApiError` into an HTTP response so handlers can return it
 * directly with `?`.
 *
 * # Response Format
 *
 * ```json
 * { "message": "Post not found" }
 * ```
 */

use axum::{
    response::{IntoResponse, Json, Response},
    http::StatusCode,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal failures are logged with full detail; the wire only
        // carries the public message.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }

        let body = Json(serde_json::json!({
            "message": self.public_message(),
        }));

        (status, body).into_response()
    }
}
