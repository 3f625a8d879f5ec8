use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Deserialize;

use stockroom_inventory::{MovementKind, MovementOutcome, StockMovement};
use stockroom_products::{Category, Product, ProductDraft};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /produtos` and `PUT /produtos/:id`. Every field is optional;
/// defaults are applied by [`ProductDraft::resolve`].
#[derive(Debug, Default, Deserialize)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub barcode: Option<String>,
    pub price_buy: Option<f64>,
    pub price_sell: Option<f64>,
    pub stock: Option<i64>,
    pub min_stock: Option<i64>,
    pub category_id: Option<i64>,
    pub manufacturing_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
}

impl From<ProductRequest> for ProductDraft {
    fn from(body: ProductRequest) -> Self {
        ProductDraft {
            name: body.name,
            barcode: body.barcode,
            price_buy: body.price_buy,
            price_sell: body.price_sell,
            stock: body.stock,
            min_stock: body.min_stock,
            category_id: body.category_id,
            manufacturing_date: unset_if_zero(body.manufacturing_date),
            expiry_date: unset_if_zero(body.expiry_date),
        }
    }
}

/// Older clients send `0001-01-01T00:00:00Z` for "no date"; treat it as absent.
fn unset_if_zero(date: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    date.filter(|d| {
        !(d.year() == 1
            && d.ordinal() == 1
            && d.num_seconds_from_midnight() == 0
            && d.nanosecond() == 0)
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    pub barcode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NearExpiryQuery {
    /// Evaluate the report as of this instant instead of now.
    pub at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct MovementRequest {
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub quantity: i64,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn category_to_json(c: &Category) -> serde_json::Value {
    serde_json::json!({
        "id": c.id,
        "name": c.name,
        "description": c.description,
    })
}

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id,
        "name": p.name,
        "barcode": p.barcode.as_str(),
        "price_buy": p.price_buy,
        "price_sell": p.price_sell,
        "stock": p.stock,
        "min_stock": p.min_stock,
        "category_id": p.category_id,
        "category": p.category.as_ref().map(category_to_json),
        "manufacturing_date": p.manufacturing_date,
        "expiry_date": p.expiry_date,
    })
}

pub fn products_to_json<'a>(products: impl IntoIterator<Item = &'a Product>) -> serde_json::Value {
    serde_json::Value::Array(products.into_iter().map(product_to_json).collect())
}

pub fn movement_to_json(m: &StockMovement) -> serde_json::Value {
    serde_json::json!({
        "id": m.id.to_string(),
        "product_id": m.product_id,
        "type": m.kind.as_str(),
        "quantity": m.quantity,
        "reason": m.reason,
        "created_at": m.created_at,
    })
}

pub fn movement_outcome_to_json(outcome: &MovementOutcome) -> serde_json::Value {
    serde_json::json!({
        "movement": movement_to_json(&outcome.movement),
        "stock": outcome.new_stock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn zero_dates_are_treated_as_absent() {
        let body: ProductRequest = serde_json::from_str(
            r#"{
                "name": "Soap",
                "barcode": "1",
                "manufacturing_date": "0001-01-01T00:00:00Z",
                "expiry_date": "2025-06-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        let draft = ProductDraft::from(body);
        assert_eq!(draft.manufacturing_date, None);
        assert_eq!(
            draft.expiry_date,
            Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn movement_request_reads_type_field() {
        let body: MovementRequest =
            serde_json::from_str(r#"{"type": "OUT", "quantity": 2}"#).unwrap();
        assert_eq!(body.kind, MovementKind::Out);
        assert_eq!(body.reason, "");

        let lower: MovementRequest =
            serde_json::from_str(r#"{"type": "adjust", "quantity": -1}"#).unwrap();
        assert_eq!(lower.kind, MovementKind::Adjust);
    }
}
