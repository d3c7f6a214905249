use crate::modules::ordering::core::catalog::CatalogItem;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const CDN_BASE_URL: &str = "https://cdn.example";

pub fn money(raw: &str) -> Decimal {
    Decimal::from_str(raw).unwrap()
}

/// Item 42, priced differently from the basket line so re-pricing would show.
pub fn make_widget() -> CatalogItem {
    CatalogItem::new(42, "Widget", money("12.50"), "widget.png").with_description("A widget")
}

pub fn make_gadget() -> CatalogItem {
    CatalogItem::new(
        7,
        "Gadget",
        money("3.00"),
        "http://catalogbaseurltobereplaced/images/products/7.png",
    )
}
