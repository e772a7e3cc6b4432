/**
 * Health Check Handler
 *
 * GET /api/health always answers 200 with a fixed payload. It takes no
 * input and has no failure path.
 */
use axum::response::Json;

use crate::shared::ApiResponse;

pub async fn health() -> Json<ApiResponse<()>> {
    tracing::debug!("Health check");
    Json(ApiResponse::message("Server is running"))
}
