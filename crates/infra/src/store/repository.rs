//! Repository abstractions.
//!
//! Handlers only ever see these traits; the persistence technology behind them
//! can be swapped without touching callers.

use async_trait::async_trait;
use thiserror::Error;

use stockroom_core::{DomainError, ProductId};
use stockroom_inventory::{MovementOutcome, RecordMovement, StockMovement};
use stockroom_products::{Barcode, Category, NewCategory, NewProduct, Product};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,

    /// A uniqueness constraint was violated (barcode, category name).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A referenced record (e.g. category) does not exist.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// A domain rule rejected the operation (e.g. stock would go negative).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Anything else the backend reported.
    #[error("storage error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },
}

impl StoreError {
    pub fn database(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Database {
            operation,
            message: message.into(),
        }
    }
}

/// Product persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, category included, ordered by id.
    async fn list_products(&self) -> StoreResult<Vec<Product>>;

    /// The product with this barcode, or [`StoreError::NotFound`].
    async fn find_by_barcode(&self, barcode: &Barcode) -> StoreResult<Product>;

    /// Insert and return the stored record (with its generated id).
    async fn create_product(&self, product: NewProduct) -> StoreResult<Product>;

    /// Replace every field of product `id`; [`StoreError::NotFound`] if absent.
    async fn update_product(&self, id: ProductId, product: NewProduct) -> StoreResult<Product>;
}

/// Category persistence.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn create_category(&self, category: NewCategory) -> StoreResult<Category>;
}

/// Append-only stock-movement ledger.
#[async_trait]
pub trait StockLedger: Send + Sync {
    /// Append the movement and apply it to the product's stock atomically.
    async fn record_movement(&self, command: RecordMovement) -> StoreResult<MovementOutcome>;

    /// Movements of one product, oldest first; [`StoreError::NotFound`] for an
    /// unknown product.
    async fn list_movements(&self, product_id: ProductId) -> StoreResult<Vec<StockMovement>>;
}

/// Everything the HTTP layer needs from persistence.
pub trait Store: ProductRepository + CategoryRepository + StockLedger {}

impl<T> Store for T where T: ProductRepository + CategoryRepository + StockLedger {}
