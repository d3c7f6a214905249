use crate::modules::ordering::core::basket::{Basket, BasketItem};
use crate::shared::core::primitives::{BasketId, CatalogItemId};
use crate::tests::fixtures::catalog::money;

pub struct BasketBuilder {
    inner: Basket,
}

impl Default for BasketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BasketBuilder {
    /// Basket 1 of buyer B1 holding two widgets at 9.99.
    pub fn new() -> Self {
        Self {
            inner: Basket::new(1, "B1").with_item(42, money("9.99"), 2),
        }
    }

    pub fn id(mut self, id: BasketId) -> Self {
        self.inner.id = id;
        self
    }

    pub fn buyer_id(mut self, buyer_id: impl Into<String>) -> Self {
        self.inner.buyer_id = buyer_id.into();
        self
    }

    pub fn empty(mut self) -> Self {
        self.inner.items.clear();
        self
    }

    pub fn item(mut self, catalog_item_id: CatalogItemId, unit_price: &str, quantity: u32) -> Self {
        self.inner.items.push(BasketItem {
            catalog_item_id,
            unit_price: money(unit_price),
            quantity,
        });
        self
    }

    pub fn build(self) -> Basket {
        self.inner
    }
}

#[cfg(test)]
mod basket_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_the_two_widget_basket() {
        let basket = BasketBuilder::default().build();
        assert_eq!(basket.id, 1);
        assert_eq!(basket.buyer_id, "B1");
        assert_eq!(basket.items.len(), 1);
        assert_eq!(basket.items[0].unit_price, money("9.99"));
        assert_eq!(basket.items[0].quantity, 2);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let basket = BasketBuilder::new()
            .id(9)
            .buyer_id("B9")
            .empty()
            .item(7, "3.00", 1)
            .build();
        assert_eq!(basket.id, 9);
        assert_eq!(basket.buyer_id, "B9");
        assert_eq!(basket.distinct_catalog_item_ids(), vec![7]);
    }
}
