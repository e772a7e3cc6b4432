/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation for backend errors,
 * so handlers can return `Result<_, BackendError>` directly.
 *
 * # Response Format
 *
 * Error responses use the same envelope as successful ones:
 * ```json
 * {
 *   "success": false,
 *   "message": "User not found"
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};
use crate::backend::error::types::BackendError;
use crate::shared::ApiResponse;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiResponse::failure(self.message());

        (status, Json(body)).into_response()
    }
}
