use crate::modules::ordering::core::order::{Order, OrderItem};
use crate::shared::core::primitives::{CatalogItemId, Money, OrderId};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLineView {
    pub catalog_item_id: CatalogItemId,
    pub product_name: String,
    pub picture_uri: String,
    pub unit_price: Money,
    pub units: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub order_id: Option<OrderId>,
    pub buyer_id: String,
    pub order_date: DateTime<Utc>,
    pub ship_to: String,
    pub total: Money,
    pub items: Vec<OrderLineView>,
}

impl From<&OrderItem> for OrderLineView {
    fn from(item: &OrderItem) -> Self {
        Self {
            catalog_item_id: item.item_ordered().catalog_item_id(),
            product_name: item.item_ordered().product_name().to_string(),
            picture_uri: item.item_ordered().picture_uri().to_string(),
            unit_price: item.unit_price(),
            units: item.units(),
        }
    }
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let address = order.ship_to_address();
        Self {
            order_id: order.id(),
            buyer_id: order.buyer_id().to_string(),
            order_date: order.order_date(),
            ship_to: format!(
                "{}, {}, {} {}",
                address.street, address.city, address.state, address.zip_code
            ),
            total: order.total(),
            items: order.order_items().iter().map(OrderLineView::from).collect(),
        }
    }
}
