use async_trait::async_trait;

use super::catalogue::CatalogueLookup;
use super::errors::DomainError;
use super::order::{NewOrder, Order};

/// Blocking persistence port for the order aggregate.
pub trait OrderRepository: Send + Sync + 'static {
    /// Stores the order and all of its lines atomically, returning them with ids.
    fn create(&self, order: NewOrder) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;
    fn find_all(&self) -> Result<Vec<Order>, DomainError>;
}

#[async_trait]
pub trait CatalogueClient: Send + Sync + 'static {
    async fn lookup(&self, book_id: i64) -> CatalogueLookup;
}
