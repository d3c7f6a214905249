// In memory basket, catalog and order repositories.
//
// Purpose
// - Run the ordering flow without a database, in tests and in local development.
//
// Responsibilities
// - Keep baskets and catalog items in maps keyed by id.
// - Append orders and assign each one a fresh id.
// - Serve the order read side.
// - Simulate an unreachable backend with an offline switch.

use crate::modules::ordering::adapters::outbound::repositories::{
    BasketRepository, CatalogRepository, OrderRepository, RepositoryError,
};
use crate::modules::ordering::core::basket::Basket;
use crate::modules::ordering::core::catalog::CatalogItem;
use crate::modules::ordering::core::order::Order;
use crate::modules::ordering::use_cases::list_orders_by_buyer::order_view::OrderView;
use crate::modules::ordering::use_cases::list_orders_by_buyer::queries_port::OrderQueries;
use crate::shared::core::primitives::{BasketId, CatalogItemId, OrderId, next_order_id};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBasketRepository {
    baskets: RwLock<HashMap<BasketId, Basket>>,
    is_offline: bool,
}

impl InMemoryBasketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert(&self, basket: Basket) {
        self.baskets.write().await.insert(basket.id, basket);
    }
}

#[async_trait::async_trait]
impl BasketRepository for InMemoryBasketRepository {
    async fn find_with_items(&self, basket_id: BasketId) -> Result<Option<Basket>, RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Basket repository offline".into()));
        }
        Ok(self.baskets.read().await.get(&basket_id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryCatalogRepository {
    items: RwLock<HashMap<CatalogItemId, CatalogItem>>,
    list_calls: AtomicUsize,
    is_offline: bool,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert(&self, item: CatalogItem) {
        self.items.write().await.insert(item.id, item);
    }

    pub async fn remove(&self, id: CatalogItemId) -> Option<CatalogItem> {
        self.items.write().await.remove(&id)
    }

    /// Number of `list_by_ids` round trips served so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_by_ids(&self, ids: &[CatalogItemId]) -> Result<Vec<CatalogItem>, RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Catalog repository offline".into()));
        }
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let guard = self.items.read().await;
        Ok(ids.iter().filter_map(|id| guard.get(id).cloned()).collect())
    }
}

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
    is_offline: bool,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait::async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn add(&self, order: Order) -> Result<Order, RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Order repository offline".into()));
        }
        let order = order.with_id(next_order_id());
        self.orders.write().await.push(order.clone());
        Ok(order)
    }
}

#[async_trait::async_trait]
impl OrderQueries for InMemoryOrderRepository {
    async fn list_by_buyer_id(&self, buyer_id: &str) -> anyhow::Result<Vec<OrderView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Order repository offline"));
        }
        let guard = self.orders.read().await;
        let mut orders: Vec<&Order> = guard
            .iter()
            .filter(|order| order.buyer_id() == buyer_id)
            .collect();
        orders.sort_by_key(|order| std::cmp::Reverse(order.order_date()));
        Ok(orders.into_iter().map(OrderView::from).collect())
    }

    async fn get_by_id(&self, order_id: OrderId) -> anyhow::Result<Option<OrderView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Order repository offline"));
        }
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .find(|order| order.id() == Some(order_id))
            .map(OrderView::from))
    }
}
