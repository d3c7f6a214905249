use crate::shared::core::primitives::{BasketId, CatalogItemId, Money};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketItem {
    pub catalog_item_id: CatalogItemId,
    /// Price captured when the item was added to the basket.
    pub unit_price: Money,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basket {
    pub id: BasketId,
    pub buyer_id: String,
    pub items: Vec<BasketItem>,
}

impl Basket {
    pub fn new(id: BasketId, buyer_id: impl Into<String>) -> Self {
        Self {
            id,
            buyer_id: buyer_id.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, catalog_item_id: CatalogItemId, unit_price: Money, quantity: u32) -> Self {
        self.items.push(BasketItem {
            catalog_item_id,
            unit_price,
            quantity,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Catalog ids referenced by the lines, each once, in first-seen order.
    pub fn distinct_catalog_item_ids(&self) -> Vec<CatalogItemId> {
        let mut ids: Vec<CatalogItemId> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            if !ids.contains(&item.catalog_item_id) {
                ids.push(item.catalog_item_id);
            }
        }
        ids
    }
}
