use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, DomainError, DomainResult, Entity, ProductId, ValueObject};

use crate::category::Category;
use crate::expiry;

/// Product barcode (EAN/UPC or any opaque scanner code).
///
/// Always non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode(String);

impl Barcode {
    pub fn parse(raw: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("barcode cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Barcode {}

impl TryFrom<String> for Barcode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Barcode> for String {
    fn from(value: Barcode) -> Self {
        value.0
    }
}

impl core::fmt::Display for Barcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product ready to be persisted: validated, with every default resolved.
///
/// Produced by [`crate::ProductDraft::resolve`]. The store assigns the id on
/// insert; updates carry the id separately.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub barcode: Barcode,
    pub price_buy: f64,
    pub price_sell: f64,
    pub stock: i64,
    pub min_stock: i64,
    pub category_id: CategoryId,
    pub manufacturing_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl NewProduct {
    /// Attach an id (and optionally the loaded category) to form a stored product.
    pub fn into_product(self, id: ProductId, category: Option<Category>) -> Product {
        Product {
            id,
            name: self.name,
            barcode: self.barcode,
            price_buy: self.price_buy,
            price_sell: self.price_sell,
            stock: self.stock,
            min_stock: self.min_stock,
            category_id: self.category_id,
            category,
            manufacturing_date: self.manufacturing_date,
            expiry_date: Some(self.expiry_date),
        }
    }
}

/// Stored product record.
///
/// `expiry_date` is optional: rows written before expiry tracking existed have
/// none, and the expiry policy never flags them.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub barcode: Barcode,
    pub price_buy: f64,
    pub price_sell: f64,
    pub stock: i64,
    pub min_stock: i64,
    pub category_id: CategoryId,
    /// Populated when the store loads the referenced category alongside.
    pub category: Option<Category>,
    pub manufacturing_date: DateTime<Utc>,
    pub expiry_date: Option<DateTime<Utc>>,
}

impl Product {
    /// Is the product inside the last 20% of its shelf life at `now`?
    pub fn is_near_expiry(&self, now: DateTime<Utc>) -> bool {
        expiry::is_near_expiry(self.manufacturing_date, self.expiry_date, now)
    }

    /// Has stock fallen to (or below) the configured minimum?
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(stock: i64, min_stock: i64) -> Product {
        let mfg = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        NewProduct {
            name: "Milk 1L".to_string(),
            barcode: Barcode::parse("7891000100103").unwrap(),
            price_buy: 3.2,
            price_sell: 4.99,
            stock,
            min_stock,
            category_id: crate::GENERAL_CATEGORY_ID,
            manufacturing_date: mfg,
            expiry_date: Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap(),
        }
        .into_product(ProductId::new(7), None)
    }

    #[test]
    fn barcode_is_trimmed_and_must_not_be_blank() {
        assert_eq!(Barcode::parse(" 123 ").unwrap().as_str(), "123");
        assert!(matches!(Barcode::parse(""), Err(DomainError::Validation(_))));
        assert!(matches!(Barcode::parse("  \t"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn barcode_deserialization_validates() {
        let ok: Barcode = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(ok.as_str(), "abc");
        assert!(serde_json::from_str::<Barcode>("\"\"").is_err());
    }

    #[test]
    fn into_product_keeps_fields_and_sets_expiry() {
        let p = sample(10, 5);
        assert_eq!(*p.id(), ProductId::new(7));
        assert_eq!(p.barcode.as_str(), "7891000100103");
        assert!(p.expiry_date.is_some());
        assert!(p.category.is_none());
    }

    #[test]
    fn identity_survives_field_changes() {
        let original = sample(10, 5);
        let mut restocked = original.clone();
        restocked.stock = 40;
        restocked.name = "Rice 10kg".to_string();
        assert!(original.same_identity_as(&restocked));
        assert_ne!(original, restocked);
    }

    #[test]
    fn product_delegates_to_expiry_policy() {
        let p = sample(10, 5);
        let before = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        assert!(!p.is_near_expiry(before));
        assert!(p.is_near_expiry(after));
    }

    #[test]
    fn product_without_expiry_is_never_near_expiry() {
        let mut p = sample(10, 5);
        p.expiry_date = None;
        let far_future = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap();
        assert!(!p.is_near_expiry(far_future));
    }

    #[test]
    fn low_stock_includes_the_threshold() {
        assert!(sample(4, 5).is_low_stock());
        assert!(sample(5, 5).is_low_stock());
        assert!(!sample(6, 5).is_low_stock());
    }
}
