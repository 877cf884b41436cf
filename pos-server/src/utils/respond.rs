//! Response helpers for handlers

use axum::Json;
use serde::Serialize;
use shared::ApiResponse;

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}
