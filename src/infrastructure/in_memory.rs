//! Process-local adapters for tests and for running without Postgres or a
//! live catalogue.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use std::sync::Mutex;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::catalogue::{CatalogueBook, CatalogueLookup};
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderLine};
use crate::domain::ports::{CatalogueClient, OrderRepository};

#[derive(Default)]
struct Store {
    last_order_id: i64,
    last_line_id: i64,
    orders: BTreeMap<i64, Order>,
    fail_next_create: Option<DomainError>,
}

/// `OrderRepository` with the same id and atomicity semantics as the
/// database-backed one.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    store: Mutex<Store>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `create` fail with `error` without storing anything.
    pub fn fail_next_create(&self, error: DomainError) {
        if let Ok(mut store) = self.store.lock() {
            store.fail_next_create = Some(error);
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Store>, DomainError> {
        self.store
            .lock()
            .map_err(|e| DomainError::Internal(format!("order store poisoned: {}", e)))
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let mut store = self.lock()?;
        if let Some(error) = store.fail_next_create.take() {
            return Err(error);
        }

        store.last_order_id += 1;
        let id = store.last_order_id;
        let mut items = Vec::with_capacity(order.lines.len());
        for line in order.lines {
            store.last_line_id += 1;
            items.push(OrderLine {
                id: store.last_line_id,
                book_id: line.book_id,
                quantity: line.quantity,
                captured_unit_price: line.captured_unit_price,
            });
        }

        let saved = Order {
            id,
            items,
            order_date: order.order_date,
        };
        store.orders.insert(id, saved.clone());
        Ok(saved)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        Ok(self.lock()?.orders.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.lock()?.orders.values().cloned().collect())
    }
}

/// Catalogue with a fixed set of books that records every lookup it serves.
#[derive(Default)]
pub struct StaticCatalogue {
    books: HashMap<i64, CatalogueLookup>,
    lookups: Mutex<Vec<i64>>,
}

impl StaticCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    /// If `price` is not a decimal number.
    pub fn with_book(mut self, id: i64, price: &str, visible: bool) -> Self {
        let price = BigDecimal::from_str(price).expect("book price must be a decimal");
        self.books.insert(
            id,
            CatalogueLookup::Found(CatalogueBook {
                id,
                title: Some(format!("Book {}", id)),
                author: None,
                publication_date: None,
                category: None,
                isbn: None,
                rating: None,
                price,
                visible,
            }),
        );
        self
    }

    /// Makes lookups of `id` behave as if the catalogue could not be reached.
    pub fn unreachable(mut self, id: i64) -> Self {
        self.books.insert(id, CatalogueLookup::Unreachable);
        self
    }

    /// Book ids looked up so far, in call order.
    pub fn lookups(&self) -> Vec<i64> {
        self.lookups.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CatalogueClient for StaticCatalogue {
    async fn lookup(&self, book_id: i64) -> CatalogueLookup {
        if let Ok(mut lookups) = self.lookups.lock() {
            lookups.push(book_id);
        }
        self.books
            .get(&book_id)
            .cloned()
            .unwrap_or(CatalogueLookup::NotFound)
    }
}
