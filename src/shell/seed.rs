// Demo data for the in-memory backend.

use crate::modules::ordering::core::basket::Basket;
use crate::modules::ordering::core::catalog::CatalogItem;
use crate::modules::ordering::core::uri_composer::CATALOG_BASE_URL_PLACEHOLDER;
use crate::shared::core::primitives::{BasketId, Money};
use crate::shell::dependencies::InMemoryStores;
use rust_decimal::Decimal;

pub const DEMO_BASKET_ID: BasketId = 1;
pub const DEMO_BUYER_ID: &str = "demouser@microsoft.com";

fn price(cents: i64) -> Money {
    Decimal::new(cents, 2)
}

fn picture(id: i32) -> String {
    format!("{CATALOG_BASE_URL_PLACEHOLDER}/images/products/{id}.png")
}

pub fn demo_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(1, ".NET Bot Black Sweatshirt", price(1950), picture(1)),
        CatalogItem::new(2, ".NET Black & White Mug", price(850), picture(2)),
        CatalogItem::new(3, "Prism White T-Shirt", price(1200), picture(3)),
        CatalogItem::new(4, ".NET Foundation Sweatshirt", price(1200), picture(4)),
        CatalogItem::new(5, "Roslyn Red Sheet", price(850), picture(5)),
        CatalogItem::new(6, ".NET Blue Sweatshirt", price(1200), picture(6)),
        CatalogItem::new(7, "Roslyn Red T-Shirt", price(1200), picture(7)),
        CatalogItem::new(8, "Kudu Purple Sweatshirt", price(850), picture(8)),
    ]
}

pub fn demo_basket() -> Basket {
    Basket::new(DEMO_BASKET_ID, DEMO_BUYER_ID)
        .with_item(1, price(1950), 1)
        .with_item(2, price(850), 2)
}

pub async fn seed_demo_data(stores: &InMemoryStores) {
    let catalog = demo_catalog();
    let items = catalog.len();
    for item in catalog {
        stores.catalog.insert(item).await;
    }
    stores.baskets.insert(demo_basket()).await;
    tracing::info!(catalog_items = items, basket_id = DEMO_BASKET_ID, "seeded demo data");
}
