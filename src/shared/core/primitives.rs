use rust_decimal::Decimal;
use uuid::Uuid;

pub type BasketId = i32;
pub type CatalogItemId = i32;
pub type OrderId = Uuid;
pub type Money = Decimal;

/// Identifier for a freshly persisted order. Version 7 keeps ids sortable by creation time.
pub fn next_order_id() -> OrderId {
    Uuid::now_v7()
}
