use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;
use stockroom_infra::StoreError;

/// Map a store failure to a response. `what` names the missing resource in
/// 404 messages ("product", "category").
///
/// Backend error details are logged, never sent to the client.
pub fn store_error_to_response(err: StoreError, what: &str) -> axum::response::Response {
    match err {
        StoreError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("{what} not found"))
        }
        StoreError::Conflict(detail) => {
            tracing::info!(%detail, "unique constraint rejected write");
            json_error(
                StatusCode::CONFLICT,
                "conflict",
                format!("{what} conflicts with an existing record"),
            )
        }
        StoreError::InvalidReference(detail) => {
            tracing::info!(%detail, "foreign key rejected write");
            json_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_reference",
                "referenced category does not exist",
            )
        }
        StoreError::Domain(e) => domain_error_to_response(e),
        err @ StoreError::Database { .. } => {
            tracing::error!(error = %err, "store operation failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal server error",
            )
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
    }
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

/// 400 for a body or query string that did not deserialize.
pub fn bad_request(rejection: impl core::fmt::Display) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "bad_request", rejection.to_string())
}
