//! Persistence: repository traits and their SQLite / in-memory implementations.

pub mod in_memory;
pub mod repository;
pub mod sqlite;

pub use in_memory::InMemoryStore;
pub use repository::{
    CategoryRepository, ProductRepository, StockLedger, Store, StoreError, StoreResult,
};
pub use sqlite::SqliteStore;
