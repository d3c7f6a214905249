use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::ordering::use_cases::list_orders_by_buyer::order_view::{
    OrderLineView, OrderView,
};
use crate::shared::core::primitives::CatalogItemId;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlOrderLine {
    pub catalog_item_id: CatalogItemId,
    pub product_name: String,
    pub picture_uri: String,
    pub unit_price: String,
    pub units: u32,
}

impl From<OrderLineView> for GqlOrderLine {
    fn from(v: OrderLineView) -> Self {
        Self {
            catalog_item_id: v.catalog_item_id,
            product_name: v.product_name,
            picture_uri: v.picture_uri,
            unit_price: v.unit_price.to_string(),
            units: v.units,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlOrder {
    pub order_id: Option<ID>,
    pub buyer_id: String,
    pub order_date: String,
    pub ship_to: String,
    pub total: String,
    pub items: Vec<GqlOrderLine>,
}

impl From<OrderView> for GqlOrder {
    fn from(v: OrderView) -> Self {
        Self {
            order_id: v.order_id.map(|id| ID(id.to_string())),
            buyer_id: v.buyer_id,
            order_date: v.order_date.to_rfc3339(),
            ship_to: v.ship_to,
            total: v.total.to_string(),
            items: v.items.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn orders_by_buyer(
        &self,
        context: &Context<'_>,
        buyer_id: String,
    ) -> GqlResult<Vec<GqlOrder>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.order_queries.list_by_buyer_id(&buyer_id).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
