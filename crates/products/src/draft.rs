//! Client-supplied product data and the defaulting rules applied to it.
//!
//! Create and update requests both go through [`ProductDraft::resolve`], so a
//! full-record update re-applies the same defaults a create would.

use chrono::{DateTime, Months, Utc};

use stockroom_core::{CategoryId, DomainError, DomainResult};

use crate::category::GENERAL_CATEGORY_ID;
use crate::product::{Barcode, NewProduct};

/// Minimum stock threshold used when the client sends none.
pub const DEFAULT_MIN_STOCK: i64 = 5;

/// Product fields as received from a client; anything may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
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

impl ProductDraft {
    /// Validate and fill in defaults.
    ///
    /// - missing or `0` category: the sentinel "General" category;
    /// - missing manufacturing date: `now`;
    /// - missing expiry date: one calendar month after `now`;
    /// - missing stock: `0`; missing minimum stock: [`DEFAULT_MIN_STOCK`];
    /// - missing prices: `0.0`.
    ///
    /// An expiry date before the manufacturing date is accepted as-is.
    pub fn resolve(self, now: DateTime<Utc>) -> DomainResult<NewProduct> {
        let name = self.name.unwrap_or_default().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let barcode = Barcode::parse(self.barcode.unwrap_or_default())?;

        let price_buy = non_negative_price("price_buy", self.price_buy.unwrap_or(0.0))?;
        let price_sell = non_negative_price("price_sell", self.price_sell.unwrap_or(0.0))?;

        let stock = self.stock.unwrap_or(0);
        if stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        let min_stock = self.min_stock.unwrap_or(DEFAULT_MIN_STOCK);
        if min_stock < 0 {
            return Err(DomainError::validation("min_stock cannot be negative"));
        }

        let category_id = match self.category_id {
            None | Some(0) => GENERAL_CATEGORY_ID,
            Some(id) if id < 0 => {
                return Err(DomainError::validation("category_id cannot be negative"));
            }
            Some(id) => CategoryId::new(id),
        };

        let manufacturing_date = self.manufacturing_date.unwrap_or(now);
        let expiry_date = match self.expiry_date {
            Some(d) => d,
            None => now
                .checked_add_months(Months::new(1))
                .ok_or_else(|| DomainError::validation("expiry date out of range"))?,
        };

        Ok(NewProduct {
            name,
            barcode,
            price_buy,
            price_sell,
            stock,
            min_stock,
            category_id,
            manufacturing_date,
            expiry_date,
        })
    }
}

fn non_negative_price(field: &str, value: f64) -> DomainResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn minimal() -> ProductDraft {
        ProductDraft {
            name: Some("Rice 5kg".to_string()),
            barcode: Some("789000000001".to_string()),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn missing_fields_get_defaults() {
        let p = minimal().resolve(now()).unwrap();

        assert_eq!(p.category_id, GENERAL_CATEGORY_ID);
        assert_eq!(p.manufacturing_date, now());
        assert_eq!(p.expiry_date, Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap());
        assert_eq!(p.stock, 0);
        assert_eq!(p.min_stock, DEFAULT_MIN_STOCK);
        assert_eq!(p.price_buy, 0.0);
    }

    #[test]
    fn zero_category_means_general() {
        let draft = ProductDraft {
            category_id: Some(0),
            ..minimal()
        };
        assert_eq!(draft.resolve(now()).unwrap().category_id, GENERAL_CATEGORY_ID);

        let draft = ProductDraft {
            category_id: Some(4),
            ..minimal()
        };
        assert_eq!(draft.resolve(now()).unwrap().category_id, CategoryId::new(4));
    }

    #[test]
    fn one_month_default_clamps_to_month_end() {
        let jan_31 = Utc.with_ymd_and_hms(2024, 1, 31, 8, 0, 0).unwrap();
        let p = minimal().resolve(jan_31).unwrap();
        assert_eq!(p.expiry_date, Utc.with_ymd_and_hms(2024, 2, 29, 8, 0, 0).unwrap());
    }

    #[test]
    fn explicit_dates_are_kept_even_when_inverted() {
        let mfg = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let exp = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let draft = ProductDraft {
            manufacturing_date: Some(mfg),
            expiry_date: Some(exp),
            ..minimal()
        };

        let p = draft.resolve(now()).unwrap();
        assert_eq!(p.manufacturing_date, mfg);
        assert_eq!(p.expiry_date, exp);
    }

    #[test]
    fn rejects_blank_name_and_barcode() {
        let no_name = ProductDraft {
            name: Some("  ".to_string()),
            ..minimal()
        };
        assert_eq!(
            no_name.resolve(now()),
            Err(DomainError::validation("name cannot be empty"))
        );

        let no_barcode = ProductDraft {
            barcode: None,
            ..minimal()
        };
        assert_eq!(
            no_barcode.resolve(now()),
            Err(DomainError::validation("barcode cannot be empty"))
        );
    }

    #[test]
    fn rejects_negative_numbers() {
        for draft in [
            ProductDraft { price_buy: Some(-1.0), ..minimal() },
            ProductDraft { price_sell: Some(f64::NAN), ..minimal() },
            ProductDraft { stock: Some(-1), ..minimal() },
            ProductDraft { min_stock: Some(-5), ..minimal() },
            ProductDraft { category_id: Some(-2), ..minimal() },
        ] {
            assert!(matches!(draft.resolve(now()), Err(DomainError::Validation(_))));
        }
    }
}
