use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use stockroom_core::ProductId;
use stockroom_inventory::RecordMovement;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

fn parse_product_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse().map_err(errors::domain_error_to_response)
}

/// GET /produtos/:id/movimentos
pub async fn list_movements(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id = match parse_product_id(&id) {
        Ok(v) => v,
        Err(response) => return response,
    };

    match services.store().list_movements(product_id).await {
        Ok(movements) => {
            let items: Vec<_> = movements.iter().map(dto::movement_to_json).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::store_error_to_response(e, "product"),
    }
}

/// POST /produtos/:id/movimentos
///
/// Applies the movement and the stock change together; a movement that would
/// take stock below zero is rejected with 422 and nothing is written.
pub async fn record_movement(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::MovementRequest>, JsonRejection>,
) -> axum::response::Response {
    let product_id = match parse_product_id(&id) {
        Ok(v) => v,
        Err(response) => return response,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::bad_request(rejection),
    };

    let command = RecordMovement {
        product_id,
        kind: body.kind,
        quantity: body.quantity,
        reason: body.reason,
        occurred_at: Utc::now(),
    };

    match services.store().record_movement(command).await {
        Ok(outcome) => {
            tracing::info!(
                product_id = %product_id,
                movement_type = outcome.movement.kind.as_str(),
                quantity = outcome.movement.quantity,
                stock = outcome.new_stock,
                "stock movement recorded"
            );
            (StatusCode::CREATED, Json(dto::movement_outcome_to_json(&outcome))).into_response()
        }
        Err(e) => errors::store_error_to_response(e, "product"),
    }
}
