// Ports for the data the ordering flow reads and writes.
//
// Boundaries
// - Baskets and catalog items are read only here.
// - Orders are append only. The repository assigns the id.

use crate::modules::ordering::core::basket::Basket;
use crate::modules::ordering::core::catalog::CatalogItem;
use crate::modules::ordering::core::order::Order;
use crate::shared::core::primitives::{BasketId, CatalogItemId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait BasketRepository: Send + Sync {
    /// Basket with its items loaded, or `None` when no basket has that id.
    async fn find_with_items(&self, basket_id: BasketId) -> Result<Option<Basket>, RepositoryError>;
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All catalog items whose id is in `ids`, in one round trip. Unknown ids are skipped.
    async fn list_by_ids(&self, ids: &[CatalogItemId]) -> Result<Vec<CatalogItem>, RepositoryError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn add(&self, order: Order) -> Result<Order, RepositoryError>;
}
