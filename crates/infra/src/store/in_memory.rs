//! In-memory store for tests/dev.
//!
//! Mirrors the SQLite store's observable behaviour: the sentinel category is
//! present from the start, barcodes and category names are unique, products
//! must reference an existing category, and movements are all-or-nothing.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use stockroom_core::{CategoryId, ProductId};
use stockroom_inventory::{MovementOutcome, RecordMovement, StockMovement};
use stockroom_products::{Barcode, Category, NewCategory, NewProduct, Product};

use super::repository::{
    CategoryRepository, ProductRepository, StockLedger, StoreError, StoreResult,
};

#[derive(Debug)]
struct State {
    categories: BTreeMap<CategoryId, Category>,
    products: BTreeMap<ProductId, Product>,
    movements: Vec<StockMovement>,
    next_category_id: i64,
    next_product_id: i64,
}

impl State {
    fn with_category(&self, mut product: Product) -> Product {
        product.category = self.categories.get(&product.category_id).cloned();
        product
    }

    fn check_references(&self, product: &NewProduct, except: Option<ProductId>) -> StoreResult<()> {
        if !self.categories.contains_key(&product.category_id) {
            return Err(StoreError::InvalidReference(format!(
                "category {} does not exist",
                product.category_id
            )));
        }
        let taken = self
            .products
            .values()
            .any(|p| p.barcode == product.barcode && Some(p.id) != except);
        if taken {
            return Err(StoreError::Conflict(format!(
                "barcode {} already exists",
                product.barcode
            )));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct InMemoryStore {
    inner: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let general = Category::general();
        let mut categories = BTreeMap::new();
        let next_category_id = general.id.get() + 1;
        categories.insert(general.id, general);

        Self {
            inner: RwLock::new(State {
                categories,
                products: BTreeMap::new(),
                movements: Vec::new(),
                next_category_id,
                next_product_id: 1,
            }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, State>> {
        self.inner
            .read()
            .map_err(|_| StoreError::database("in_memory_read", "lock poisoned"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, State>> {
        self.inner
            .write()
            .map_err(|_| StoreError::database("in_memory_write", "lock poisoned"))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let state = self.read()?;
        Ok(state
            .products
            .values()
            .cloned()
            .map(|p| state.with_category(p))
            .collect())
    }

    async fn find_by_barcode(&self, barcode: &Barcode) -> StoreResult<Product> {
        let state = self.read()?;
        state
            .products
            .values()
            .find(|p| &p.barcode == barcode)
            .cloned()
            .map(|p| state.with_category(p))
            .ok_or(StoreError::NotFound)
    }

    async fn create_product(&self, product: NewProduct) -> StoreResult<Product> {
        let mut state = self.write()?;
        state.check_references(&product, None)?;

        let id = ProductId::new(state.next_product_id);
        state.next_product_id += 1;

        let stored = product.into_product(id, None);
        state.products.insert(id, stored.clone());
        Ok(state.with_category(stored))
    }

    async fn update_product(&self, id: ProductId, product: NewProduct) -> StoreResult<Product> {
        let mut state = self.write()?;
        if !state.products.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        state.check_references(&product, Some(id))?;

        let stored = product.into_product(id, None);
        state.products.insert(id, stored.clone());
        Ok(state.with_category(stored))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn create_category(&self, category: NewCategory) -> StoreResult<Category> {
        let mut state = self.write()?;
        if state.categories.values().any(|c| c.name == category.name()) {
            return Err(StoreError::Conflict(format!(
                "category {} already exists",
                category.name()
            )));
        }

        let id = CategoryId::new(state.next_category_id);
        state.next_category_id += 1;

        let stored = category.into_category(id);
        state.categories.insert(id, stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl StockLedger for InMemoryStore {
    async fn record_movement(&self, command: RecordMovement) -> StoreResult<MovementOutcome> {
        let mut state = self.write()?;
        let product = state
            .products
            .get_mut(&command.product_id)
            .ok_or(StoreError::NotFound)?;

        let outcome = command.handle(product.stock)?;
        product.stock = outcome.new_stock;
        state.movements.push(outcome.movement.clone());
        Ok(outcome)
    }

    async fn list_movements(&self, product_id: ProductId) -> StoreResult<Vec<StockMovement>> {
        let state = self.read()?;
        if !state.products.contains_key(&product_id) {
            return Err(StoreError::NotFound);
        }
        Ok(state
            .movements
            .iter()
            .filter(|m| m.product_id == product_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockroom_inventory::MovementKind;
    use stockroom_products::{GENERAL_CATEGORY_ID, ProductDraft};

    fn new_product(barcode: &str) -> NewProduct {
        ProductDraft {
            name: Some("Beans".to_string()),
            barcode: Some(barcode.to_string()),
            stock: Some(3),
            ..ProductDraft::default()
        }
        .resolve(Utc::now())
        .unwrap()
    }

    #[tokio::test]
    async fn starts_with_general_category() {
        let store = InMemoryStore::new();
        let categories = store.list_categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, GENERAL_CATEGORY_ID);

        let next = store
            .create_category(NewCategory::new("Frozen", "").unwrap())
            .await
            .unwrap();
        assert_eq!(next.id, CategoryId::new(2));
    }

    #[tokio::test]
    async fn mirrors_constraint_errors() {
        let store = InMemoryStore::new();
        let a = store.create_product(new_product("A")).await.unwrap();
        store.create_product(new_product("B")).await.unwrap();

        // Updating a product to its own barcode is fine; to another's is not.
        store.update_product(a.id, new_product("A")).await.unwrap();
        assert!(matches!(
            store.update_product(a.id, new_product("B")).await,
            Err(StoreError::Conflict(_))
        ));

        let mut orphan = new_product("C");
        orphan.category_id = CategoryId::new(42);
        assert!(matches!(
            store.create_product(orphan).await,
            Err(StoreError::InvalidReference(_))
        ));

        assert!(matches!(
            store
                .create_category(NewCategory::new("General", "dup").unwrap())
                .await,
            Err(StoreError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn rejected_movement_changes_nothing() {
        let store = InMemoryStore::new();
        let p = store.create_product(new_product("M")).await.unwrap();

        let err = store
            .record_movement(RecordMovement {
                product_id: p.id,
                kind: MovementKind::Out,
                quantity: 4,
                reason: "loss".to_string(),
                occurred_at: Utc::now(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Domain(_)));
        assert!(store.list_movements(p.id).await.unwrap().is_empty());
        assert_eq!(store.list_products().await.unwrap()[0].stock, 3);
    }
}
