use crate::modules::ordering::use_cases::list_orders_by_buyer::order_view::OrderView;
use crate::shared::core::primitives::OrderId;
use async_trait::async_trait;

#[async_trait]
pub trait OrderQueries {
    /// Orders placed by the buyer, newest first.
    async fn list_by_buyer_id(&self, buyer_id: &str) -> anyhow::Result<Vec<OrderView>>;

    async fn get_by_id(&self, order_id: OrderId) -> anyhow::Result<Option<OrderView>>;
}
