//! Infrastructure layer: configuration and persistence.

pub mod config;
pub mod store;

pub use config::{AppConfig, ConfigError, DatabaseConfig, DatabaseLocation, ReleaseInfo, ServerConfig};
pub use store::{
    CategoryRepository, InMemoryStore, ProductRepository, SqliteStore, StockLedger, Store,
    StoreError, StoreResult,
};
