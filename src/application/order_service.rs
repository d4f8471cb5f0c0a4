use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::order_validator::validate_lines;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderRequest};
use crate::domain::ports::{CatalogueClient, OrderRepository};

/// Order use cases: create one, fetch one, list all.
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
    catalogue: Arc<dyn CatalogueClient>,
    clock: fn() -> DateTime<Utc>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>, catalogue: Arc<dyn CatalogueClient>) -> Self {
        Self {
            repo,
            catalogue,
            clock: Utc::now,
        }
    }

    /// Replaces the clock used to stamp `order_date`.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn create_order(&self, request: OrderRequest) -> Result<Order, DomainError> {
        log::info!("Creating order with {} items", request.items.len());

        let lines = validate_lines(self.catalogue.as_ref(), &request.items).await?;
        let order = NewOrder::build(lines, (self.clock)());

        let saved = self.blocking(move |repo| repo.create(order)).await?;
        log::info!("Order created successfully with ID: {}", saved.id);
        Ok(saved)
    }

    /// `Ok(None)` when no order has the id; a non-numeric id is an error.
    pub async fn get_order(&self, raw_id: &str) -> Result<Option<Order>, DomainError> {
        let id: i64 = raw_id
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidId(raw_id.to_string()))?;

        self.blocking(move |repo| repo.find_by_id(id)).await
    }

    pub async fn get_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.blocking(|repo| repo.find_all()).await
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&dyn OrderRepository) -> Result<T, DomainError> + Send + 'static,
        T: Send + 'static,
    {
        let repo = Arc::clone(&self.repo);
        tokio::task::spawn_blocking(move || f(repo.as_ref()))
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?
    }
}
