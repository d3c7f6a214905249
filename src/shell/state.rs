use crate::modules::ordering::adapters::outbound::repositories_in_memory::{
    InMemoryBasketRepository, InMemoryCatalogRepository, InMemoryOrderRepository,
};
use crate::modules::ordering::use_cases::create_order::handler::CreateOrderHandler;
use crate::modules::ordering::use_cases::list_orders_by_buyer::queries_port::OrderQueries;
use std::sync::Arc;

pub type InMemoryCreateOrderHandler =
    CreateOrderHandler<InMemoryBasketRepository, InMemoryCatalogRepository, InMemoryOrderRepository>;

#[derive(Clone)]
pub struct AppState {
    pub create_order_handler: Arc<InMemoryCreateOrderHandler>,
    pub order_queries: Arc<dyn OrderQueries + Send + Sync>,
}
