use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};

use stockroom_core::ProductId;
use stockroom_products::{Barcode, NewProduct, ProductDraft};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// GET /produtos[?barcode=X]
///
/// Without `barcode`: every product as a JSON array. With it: the single
/// matching product, or 404.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::ProductListQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::bad_request(rejection),
    };

    if let Some(raw) = query.barcode.filter(|b| !b.trim().is_empty()) {
        let barcode = match Barcode::parse(&raw) {
            Ok(b) => b,
            Err(e) => return errors::domain_error_to_response(e),
        };
        return match services.store().find_by_barcode(&barcode).await {
            Ok(product) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
            Err(e) => errors::store_error_to_response(e, "product"),
        };
    }

    match services.store().list_products().await {
        Ok(products) => (StatusCode::OK, Json(dto::products_to_json(&products))).into_response(),
        Err(e) => errors::store_error_to_response(e, "product"),
    }
}

/// POST /produtos
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let product = match resolve_body(body, Utc::now()) {
        Ok(p) => p,
        Err(response) => return response,
    };

    match services.store().create_product(product).await {
        Ok(created) => {
            tracing::info!(product_id = %created.id, barcode = %created.barcode, "product created");
            (StatusCode::CREATED, Json(dto::product_to_json(&created))).into_response()
        }
        Err(e) => errors::store_error_to_response(e, "product"),
    }
}

/// PUT /produtos/:id
///
/// Full replacement; omitted fields get the same defaults as on create.
pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let product = match resolve_body(body, Utc::now()) {
        Ok(p) => p,
        Err(response) => return response,
    };

    match services.store().update_product(id, product).await {
        Ok(updated) => (StatusCode::OK, Json(dto::product_to_json(&updated))).into_response(),
        Err(e) => errors::store_error_to_response(e, "product"),
    }
}

/// GET /produtos/vencendo[?at=RFC3339]
///
/// Products in the last 20% of their shelf life, as of `at` (default: now).
pub async fn list_near_expiry(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::NearExpiryQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::bad_request(rejection),
    };
    let now = query.at.unwrap_or_else(Utc::now);

    match services.store().list_products().await {
        Ok(products) => {
            let near = products.iter().filter(|p| p.is_near_expiry(now));
            (StatusCode::OK, Json(dto::products_to_json(near))).into_response()
        }
        Err(e) => errors::store_error_to_response(e, "product"),
    }
}

/// GET /produtos/estoque-baixo
pub async fn list_low_stock(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_products().await {
        Ok(products) => {
            let low = products.iter().filter(|p| p.is_low_stock());
            (StatusCode::OK, Json(dto::products_to_json(low))).into_response()
        }
        Err(e) => errors::store_error_to_response(e, "product"),
    }
}

fn resolve_body(
    body: Result<Json<dto::ProductRequest>, JsonRejection>,
    now: DateTime<Utc>,
) -> Result<NewProduct, axum::response::Response> {
    let Json(body) = body.map_err(errors::bad_request)?;
    let product = ProductDraft::from(body)
        .resolve(now)
        .map_err(errors::domain_error_to_response)?;

    if product.expiry_date < product.manufacturing_date {
        tracing::warn!(
            barcode = %product.barcode,
            manufacturing_date = %product.manufacturing_date,
            expiry_date = %product.expiry_date,
            "expiry date precedes manufacturing date; accepting as-is"
        );
    }
    Ok(product)
}
