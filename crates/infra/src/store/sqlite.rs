//! SQLite-backed store.
//!
//! ## Lifecycle
//!
//! [`SqliteStore::open`] is called once at process start: it creates the data
//! directory, opens the pool (WAL journal, foreign keys on), creates the schema
//! and seeds the sentinel category. [`SqliteStore::close`] drains the pool at
//! shutdown. The store is a plain value handed to whoever needs it; there is no
//! process-wide handle.
//!
//! ## Error mapping
//!
//! | SQLite condition | `StoreError` |
//! |---|---|
//! | unique constraint (barcode, category name) | `Conflict` |
//! | foreign key constraint (unknown category) | `InvalidReference` |
//! | row not found | `NotFound` |
//! | anything else | `Database` |

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow,
};
use sqlx::Row;

use stockroom_core::{CategoryId, DomainError, MovementId, ProductId};
use stockroom_inventory::{MovementKind, MovementOutcome, RecordMovement, StockMovement};
use stockroom_products::{
    Barcode, Category, GENERAL_CATEGORY_ID, NewCategory, NewProduct, Product,
};

use super::repository::{
    CategoryRepository, ProductRepository, StockLedger, StoreError, StoreResult,
};
use crate::config::{DatabaseConfig, DatabaseLocation};

/// Schema, in dependency order (categories, products, movements).
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS categories (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT    NOT NULL UNIQUE,
        description TEXT    NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id                 INTEGER PRIMARY KEY AUTOINCREMENT,
        name               TEXT    NOT NULL,
        barcode            TEXT    NOT NULL UNIQUE,
        price_buy          REAL    NOT NULL,
        price_sell         REAL    NOT NULL,
        stock              INTEGER NOT NULL DEFAULT 0,
        min_stock          INTEGER NOT NULL DEFAULT 5,
        category_id        INTEGER NOT NULL REFERENCES categories (id),
        manufacturing_date TEXT    NOT NULL,
        expiry_date        TEXT    NULL,
        created_at         TEXT    NOT NULL,
        updated_at         TEXT    NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_products_name ON products (name)",
    "CREATE INDEX IF NOT EXISTS idx_products_expiry_date ON products (expiry_date)",
    r#"
    CREATE TABLE IF NOT EXISTS stock_movements (
        id         TEXT    PRIMARY KEY,
        product_id INTEGER NOT NULL REFERENCES products (id),
        type       TEXT    NOT NULL CHECK (type IN ('IN', 'OUT', 'ADJUST')),
        quantity   INTEGER NOT NULL,
        reason     TEXT    NOT NULL DEFAULT '',
        created_at TEXT    NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_stock_movements_product ON stock_movements (product_id)",
];

const SELECT_PRODUCTS: &str = r#"
    SELECT
        p.id,
        p.name,
        p.barcode,
        p.price_buy,
        p.price_sell,
        p.stock,
        p.min_stock,
        p.category_id,
        p.manufacturing_date,
        p.expiry_date,
        c.name        AS category_name,
        c.description AS category_description
    FROM products p
    LEFT JOIN categories c ON c.id = p.category_id
"#;

/// SQLite store implementing every repository trait.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed), migrate and seed.
    pub async fn open(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = match &config.location {
            DatabaseLocation::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        StoreError::database(
                            "create_data_dir",
                            format!("{}: {}", parent.display(), e),
                        )
                    })?;
                }

                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .foreign_keys(true)
                    .busy_timeout(Duration::from_secs(5));

                SqlitePoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect_with(options)
                    .await
                    .map_err(|e| map_sqlx_error("connect", e))?
            }
            DatabaseLocation::Memory => {
                let options = SqliteConnectOptions::from_str("sqlite::memory:")
                    .map_err(|e| map_sqlx_error("connect", e))?
                    .foreign_keys(true);

                // Every connection to `:memory:` is its own database; pin one.
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None::<Duration>)
                    .max_lifetime(None::<Duration>)
                    .connect_with(options)
                    .await
                    .map_err(|e| map_sqlx_error("connect", e))?
            }
        };

        let store = Self { pool };
        store.migrate().await?;
        store.seed().await?;

        tracing::info!(database = ?config.location, "store opened");
        Ok(store)
    }

    /// Shorthand for a private in-memory database.
    pub async fn open_in_memory() -> StoreResult<Self> {
        Self::open(&DatabaseConfig::in_memory()).await
    }

    /// Close the pool; waits for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("store closed");
    }

    async fn migrate(&self) -> StoreResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("migrate", e))?;
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("migrate", e))?;
        }
        tx.commit().await.map_err(|e| map_sqlx_error("migrate", e))
    }

    /// Make sure category 1 ("General") exists on an empty database.
    async fn seed(&self) -> StoreResult<()> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS total FROM categories")
            .fetch_one(&self.pool)
            .await
            .and_then(|row| row.try_get("total"))
            .map_err(|e| map_sqlx_error("seed", e))?;

        if count == 0 {
            let general = Category::general();
            tracing::info!(category = %general.name, "seeding default category");
            sqlx::query("INSERT INTO categories (id, name, description) VALUES (?1, ?2, ?3)")
                .bind(general.id.get())
                .bind(&general.name)
                .bind(&general.description)
                .execute(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("seed", e))?;
        }
        Ok(())
    }

    async fn fetch_product(&self, id: ProductId) -> StoreResult<Product> {
        let sql = format!("{SELECT_PRODUCTS} WHERE p.id = ?1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("fetch_product", e))?
            .ok_or(StoreError::NotFound)?;
        row.try_into()
    }
}

#[async_trait]
impl ProductRepository for SqliteStore {
    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let sql = format!("{SELECT_PRODUCTS} ORDER BY p.id");
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_products", e))?;
        rows.into_iter().map(Product::try_from).collect()
    }

    async fn find_by_barcode(&self, barcode: &Barcode) -> StoreResult<Product> {
        let sql = format!("{SELECT_PRODUCTS} WHERE p.barcode = ?1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(barcode.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_by_barcode", e))?
            .ok_or(StoreError::NotFound)?;
        row.try_into()
    }

    async fn create_product(&self, product: NewProduct) -> StoreResult<Product> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO products (
                name, barcode, price_buy, price_sell, stock, min_stock,
                category_id, manufacturing_date, expiry_date, created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)
            "#,
        )
        .bind(&product.name)
        .bind(product.barcode.as_str())
        .bind(product.price_buy)
        .bind(product.price_sell)
        .bind(product.stock)
        .bind(product.min_stock)
        .bind(product.category_id.get())
        .bind(product.manufacturing_date)
        .bind(product.expiry_date)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_product", e))?;

        let id = ProductId::new(result.last_insert_rowid());
        tracing::debug!(product_id = %id, barcode = %product.barcode, "product created");
        self.fetch_product(id).await
    }

    async fn update_product(&self, id: ProductId, product: NewProduct) -> StoreResult<Product> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                barcode = ?3,
                price_buy = ?4,
                price_sell = ?5,
                stock = ?6,
                min_stock = ?7,
                category_id = ?8,
                manufacturing_date = ?9,
                expiry_date = ?10,
                updated_at = ?11
            WHERE id = ?1
            "#,
        )
        .bind(id.get())
        .bind(&product.name)
        .bind(product.barcode.as_str())
        .bind(product.price_buy)
        .bind(product.price_sell)
        .bind(product.stock)
        .bind(product.min_stock)
        .bind(product.category_id.get())
        .bind(product.manufacturing_date)
        .bind(product.expiry_date)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_product", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        self.fetch_product(id).await
    }
}

#[async_trait]
impl CategoryRepository for SqliteStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, name, description FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_categories", e))?;

        rows.iter()
            .map(|row| {
                Ok(Category {
                    id: CategoryId::new(row.try_get("id")?),
                    name: row.try_get("name")?,
                    description: row.try_get("description")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| map_sqlx_error("list_categories", e))
    }

    async fn create_category(&self, category: NewCategory) -> StoreResult<Category> {
        let result = sqlx::query("INSERT INTO categories (name, description) VALUES (?1, ?2)")
            .bind(category.name())
            .bind(category.description())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("create_category", e))?;

        Ok(category.into_category(CategoryId::new(result.last_insert_rowid())))
    }
}

#[async_trait]
impl StockLedger for SqliteStore {
    async fn record_movement(&self, command: RecordMovement) -> StoreResult<MovementOutcome> {
        command.validate()?;
        let delta = command.stock_delta();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("record_movement", e))?;

        // Must be the first statement: a write takes the lock immediately and
        // waits on busy_timeout, a read upgraded later fails with SQLITE_BUSY.
        let updated: Option<i64> = sqlx::query(
            r#"
            UPDATE products SET stock = stock + ?2, updated_at = ?3
            WHERE id = ?1 AND stock + ?2 >= 0
            RETURNING stock
            "#,
        )
        .bind(command.product_id.get())
        .bind(delta)
        .bind(command.occurred_at)
        .fetch_optional(&mut *tx)
        .await
        .and_then(|row| row.map(|r| r.try_get("stock")).transpose())
        .map_err(|e| map_sqlx_error("record_movement", e))?;

        let outcome = match updated {
            Some(new_stock) => command.handle(new_stock - delta)?,
            None => {
                let current: Option<i64> = sqlx::query("SELECT stock FROM products WHERE id = ?1")
                    .bind(command.product_id.get())
                    .fetch_optional(&mut *tx)
                    .await
                    .and_then(|row| row.map(|r| r.try_get("stock")).transpose())
                    .map_err(|e| map_sqlx_error("record_movement", e))?;
                let current = current.ok_or(StoreError::NotFound)?;
                // Product exists, so the guard rejected the new stock level.
                command.handle(current)?;
                return Err(DomainError::invariant("stock cannot go negative").into());
            }
        };
        let movement = &outcome.movement;

        sqlx::query(
            r#"
            INSERT INTO stock_movements (id, product_id, type, quantity, reason, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(movement.id.to_string())
        .bind(movement.product_id.get())
        .bind(movement.kind.as_str())
        .bind(movement.quantity)
        .bind(&movement.reason)
        .bind(movement.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("record_movement", e))?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("record_movement", e))?;

        tracing::debug!(
            product_id = %movement.product_id,
            kind = %movement.kind,
            quantity = movement.quantity,
            new_stock = outcome.new_stock,
            "stock movement recorded"
        );
        Ok(outcome)
    }

    async fn list_movements(&self, product_id: ProductId) -> StoreResult<Vec<StockMovement>> {
        let exists = sqlx::query("SELECT 1 FROM products WHERE id = ?1")
            .bind(product_id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_movements", e))?;
        if exists.is_none() {
            return Err(StoreError::NotFound);
        }

        let rows = sqlx::query_as::<_, MovementRow>(
            r#"
            SELECT id, product_id, type, quantity, reason, created_at
            FROM stock_movements
            WHERE product_id = ?1
            ORDER BY created_at, id
            "#,
        )
        .bind(product_id.get())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_movements", e))?;

        rows.into_iter().map(StockMovement::try_from).collect()
    }
}

struct ProductRow {
    id: i64,
    name: String,
    barcode: String,
    price_buy: f64,
    price_sell: f64,
    stock: i64,
    min_stock: i64,
    category_id: i64,
    manufacturing_date: DateTime<Utc>,
    expiry_date: Option<DateTime<Utc>>,
    category_name: Option<String>,
    category_description: Option<String>,
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for ProductRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(ProductRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            barcode: row.try_get("barcode")?,
            price_buy: row.try_get("price_buy")?,
            price_sell: row.try_get("price_sell")?,
            stock: row.try_get("stock")?,
            min_stock: row.try_get("min_stock")?,
            category_id: row.try_get("category_id")?,
            manufacturing_date: row.try_get("manufacturing_date")?,
            expiry_date: row.try_get("expiry_date")?,
            category_name: row.try_get("category_name")?,
            category_description: row.try_get("category_description")?,
        })
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = StoreError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let barcode = Barcode::parse(&row.barcode).map_err(|e| {
            StoreError::database("decode_product", format!("product {}: {}", row.id, e))
        })?;
        let category_id = CategoryId::new(row.category_id);
        let category = row.category_name.map(|name| Category {
            id: category_id,
            name,
            description: row.category_description.unwrap_or_default(),
        });

        Ok(Product {
            id: ProductId::new(row.id),
            name: row.name,
            barcode,
            price_buy: row.price_buy,
            price_sell: row.price_sell,
            stock: row.stock,
            min_stock: row.min_stock,
            category_id,
            category,
            manufacturing_date: row.manufacturing_date,
            expiry_date: row.expiry_date,
        })
    }
}

struct MovementRow {
    id: String,
    product_id: i64,
    kind: String,
    quantity: i64,
    reason: String,
    created_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for MovementRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(MovementRow {
            id: row.try_get("id")?,
            product_id: row.try_get("product_id")?,
            kind: row.try_get("type")?,
            quantity: row.try_get("quantity")?,
            reason: row.try_get("reason")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl TryFrom<MovementRow> for StockMovement {
    type Error = StoreError;

    fn try_from(row: MovementRow) -> Result<Self, Self::Error> {
        let decode = |e: DomainError| {
            StoreError::database("decode_movement", format!("movement {}: {}", row.id, e))
        };
        Ok(StockMovement {
            id: MovementId::from_str(&row.id).map_err(decode)?,
            product_id: ProductId::new(row.product_id),
            kind: MovementKind::from_str(&row.kind).map_err(decode)?,
            quantity: row.quantity,
            reason: row.reason,
            created_at: row.created_at,
        })
    }
}

fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = format!("database error in {}: {}", operation, db_err.message());
            if db_err.is_unique_violation() {
                StoreError::Conflict(msg)
            } else if db_err.is_foreign_key_violation() {
                StoreError::InvalidReference(msg)
            } else {
                StoreError::Database {
                    operation,
                    message: msg,
                }
            }
        }
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::PoolClosed => StoreError::database(operation, "connection pool closed"),
        other => StoreError::database(operation, other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use stockroom_products::ProductDraft;

    fn draft(barcode: &str) -> NewProduct {
        ProductDraft {
            name: Some(format!("Product {barcode}")),
            barcode: Some(barcode.to_string()),
            price_buy: Some(1.5),
            price_sell: Some(2.5),
            stock: Some(10),
            ..ProductDraft::default()
        }
        .resolve(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .unwrap()
    }

    #[tokio::test]
    async fn open_seeds_general_category_once() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        store.seed().await.unwrap();

        let categories = store.list_categories().await.unwrap();
        assert_eq!(categories, vec![Category::general()]);
    }

    #[tokio::test]
    async fn create_then_lookup_by_barcode_includes_category() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let created = store.create_product(draft("789")).await.unwrap();

        assert_eq!(created.id, ProductId::new(1));
        assert_eq!(created.category, Some(Category::general()));

        let found = store
            .find_by_barcode(&Barcode::parse("789").unwrap())
            .await
            .unwrap();
        assert_eq!(found, created);
        assert_eq!(
            found.expiry_date,
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        );
    }

    #[tokio::test]
    async fn unknown_barcode_is_not_found() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let err = store
            .find_by_barcode(&Barcode::parse("nope").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[tokio::test]
    async fn duplicate_barcode_is_a_conflict() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        store.create_product(draft("111")).await.unwrap();
        let err = store.create_product(draft("111")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)), "{err:?}");
    }

    #[tokio::test]
    async fn unknown_category_is_an_invalid_reference() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let mut p = draft("222");
        p.category_id = CategoryId::new(99);
        let err = store.create_product(p).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidReference(_)), "{err:?}");
    }

    #[tokio::test]
    async fn update_replaces_fields_and_reports_missing_ids() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let created = store.create_product(draft("333")).await.unwrap();

        let mut replacement = draft("333-B");
        replacement.name = "Renamed".to_string();
        replacement.expiry_date = replacement.manufacturing_date + TimeDelta::days(3);
        let updated = store.update_product(created.id, replacement).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.barcode.as_str(), "333-B");

        let err = store
            .update_product(ProductId::new(404), draft("x"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[tokio::test]
    async fn movements_update_stock_atomically() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let p = store.create_product(draft("444")).await.unwrap();

        let cmd = |kind, quantity| RecordMovement {
            product_id: p.id,
            kind,
            quantity,
            reason: "test".to_string(),
            occurred_at: Utc::now(),
        };

        let out = store.record_movement(cmd(MovementKind::Out, 4)).await.unwrap();
        assert_eq!(out.new_stock, 6);
        store.record_movement(cmd(MovementKind::In, 1)).await.unwrap();

        // Rejected movement leaves neither a ledger entry nor a stock change.
        let err = store
            .record_movement(cmd(MovementKind::Out, 100))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Domain(_)));

        let movements = store.list_movements(p.id).await.unwrap();
        assert_eq!(movements.len(), 2);
        assert_eq!(movements[0].kind, MovementKind::Out);

        let reloaded = store
            .find_by_barcode(&Barcode::parse("444").unwrap())
            .await
            .unwrap();
        assert_eq!(reloaded.stock, 7);
    }

    #[tokio::test]
    async fn movements_for_unknown_product_are_not_found() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        assert_eq!(
            store.list_movements(ProductId::new(5)).await.unwrap_err(),
            StoreError::NotFound
        );
        let err = store
            .record_movement(RecordMovement {
                product_id: ProductId::new(5),
                kind: MovementKind::In,
                quantity: 1,
                reason: String::new(),
                occurred_at: Utc::now(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_movements_on_a_file_database_all_apply() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(&DatabaseConfig::file(dir.path().join("busy.db")))
            .await
            .unwrap();
        let p = store.create_product(draft("666")).await.unwrap();

        let tasks: Vec<_> = (0..40)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .record_movement(RecordMovement {
                            product_id: p.id,
                            kind: MovementKind::In,
                            quantity: 1,
                            reason: "restock".to_string(),
                            occurred_at: Utc::now(),
                        })
                        .await
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let reloaded = store
            .find_by_barcode(&Barcode::parse("666").unwrap())
            .await
            .unwrap();
        assert_eq!(reloaded.stock, 10 + 40);
        assert_eq!(store.list_movements(p.id).await.unwrap().len(), 40);
        store.close().await;
    }

    #[tokio::test]
    async fn file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::file(dir.path().join("nested").join("inv.db"));

        let store = SqliteStore::open(&config).await.unwrap();
        store.create_product(draft("555")).await.unwrap();
        store
            .create_category(NewCategory::new("Beverages", "Drinks").unwrap())
            .await
            .unwrap();
        store.close().await;

        let reopened = SqliteStore::open(&config).await.unwrap();
        assert_eq!(reopened.list_products().await.unwrap().len(), 1);
        assert_eq!(reopened.list_categories().await.unwrap().len(), 2);
        reopened.close().await;
    }
}
