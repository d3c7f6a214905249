use crate::modules::ordering::core::address::Address;
use crate::modules::ordering::core::order::{CatalogItemOrdered, Order, OrderItem};
use crate::tests::fixtures::catalog::money;

pub fn make_address() -> Address {
    Address::new("123 Main St.", "Kent", "OH", "44240")
}

/// Canonical one-line order: two widgets at 9.99.
pub fn make_order_for(buyer_id: &str) -> Order {
    let snapshot = CatalogItemOrdered::new(42, "Widget", "https://cdn.example/widget.png").unwrap();
    let line = OrderItem::new(snapshot, money("9.99"), 2).unwrap();
    Order::new(buyer_id, make_address(), vec![line]).unwrap()
}
