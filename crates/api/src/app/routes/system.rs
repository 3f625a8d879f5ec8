use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// GET /version: latest client release, for update checks.
pub async fn version(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(services.release().clone())
}
