//! Products/catalogue domain module.
//!
//! This crate contains business rules for products and categories, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The clock
//! is always passed in by the caller.

pub mod category;
pub mod draft;
pub mod expiry;
pub mod product;

pub use category::{Category, GENERAL_CATEGORY_ID, GENERAL_CATEGORY_NAME, NewCategory};
pub use draft::{DEFAULT_MIN_STOCK, ProductDraft};
pub use expiry::{alert_window, is_near_expiry, trigger_date};
pub use product::{Barcode, NewProduct, Product};
