// Order aggregate.
//
// Purpose
// - Immutable record of a completed checkout.
//
// Responsibilities
// - Enforce construction invariants for the snapshot, the lines and the order itself.
// - Stamp the order date from the system clock.
// - Compute totals from the lines.
//
// Boundaries
// - The only mutation after construction is the id assigned by the repository.

use crate::modules::ordering::core::address::Address;
use crate::shared::core::primitives::{CatalogItemId, Money, OrderId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("catalog item id must be positive, got {0}")]
    InvalidCatalogItemId(CatalogItemId),

    #[error("product name must not be empty")]
    EmptyProductName,

    #[error("picture uri must not be empty")]
    EmptyPictureUri,

    #[error("order line for catalog item {0} has no units")]
    NoUnits(CatalogItemId),

    #[error("order line for catalog item {catalog_item_id} has a negative unit price {unit_price}")]
    NegativeUnitPrice {
        catalog_item_id: CatalogItemId,
        unit_price: Money,
    },

    #[error("buyer id must not be empty")]
    EmptyBuyerId,

    #[error("an order needs at least one item")]
    NoItems,

    #[error("order total for catalog item {0} exceeds the representable amount")]
    TotalOverflow(CatalogItemId),
}

/// Catalog data as it was when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogItemOrdered {
    catalog_item_id: CatalogItemId,
    product_name: String,
    picture_uri: String,
}

impl CatalogItemOrdered {
    pub fn new(
        catalog_item_id: CatalogItemId,
        product_name: impl Into<String>,
        picture_uri: impl Into<String>,
    ) -> Result<Self, OrderError> {
        let product_name = product_name.into();
        let picture_uri = picture_uri.into();
        if catalog_item_id < 1 {
            return Err(OrderError::InvalidCatalogItemId(catalog_item_id));
        }
        if product_name.trim().is_empty() {
            return Err(OrderError::EmptyProductName);
        }
        if picture_uri.trim().is_empty() {
            return Err(OrderError::EmptyPictureUri);
        }
        Ok(Self {
            catalog_item_id,
            product_name,
            picture_uri,
        })
    }

    pub fn catalog_item_id(&self) -> CatalogItemId {
        self.catalog_item_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn picture_uri(&self) -> &str {
        &self.picture_uri
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderItem {
    item_ordered: CatalogItemOrdered,
    unit_price: Money,
    units: u32,
}

impl OrderItem {
    pub fn new(item_ordered: CatalogItemOrdered, unit_price: Money, units: u32) -> Result<Self, OrderError> {
        if units == 0 {
            return Err(OrderError::NoUnits(item_ordered.catalog_item_id));
        }
        if unit_price.is_sign_negative() && !unit_price.is_zero() {
            return Err(OrderError::NegativeUnitPrice {
                catalog_item_id: item_ordered.catalog_item_id,
                unit_price,
            });
        }
        if unit_price.checked_mul(Money::from(units)).is_none() {
            return Err(OrderError::TotalOverflow(item_ordered.catalog_item_id));
        }
        Ok(Self {
            item_ordered,
            unit_price,
            units,
        })
    }

    pub fn item_ordered(&self) -> &CatalogItemOrdered {
        &self.item_ordered
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    /// Cannot overflow: `new` rejects lines whose total is not representable.
    pub fn line_total(&self) -> Money {
        self.unit_price * Money::from(self.units)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: Option<OrderId>,
    buyer_id: String,
    ship_to_address: Address,
    order_items: Vec<OrderItem>,
    order_date: DateTime<Utc>,
}

impl Order {
    pub fn new(
        buyer_id: impl Into<String>,
        ship_to_address: Address,
        order_items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let buyer_id = buyer_id.into();
        if buyer_id.trim().is_empty() {
            return Err(OrderError::EmptyBuyerId);
        }
        if order_items.is_empty() {
            return Err(OrderError::NoItems);
        }
        order_items.iter().try_fold(Money::ZERO, |total, item| {
            total
                .checked_add(item.line_total())
                .ok_or(OrderError::TotalOverflow(item.item_ordered.catalog_item_id))
        })?;
        Ok(Self {
            id: None,
            buyer_id,
            ship_to_address,
            order_items,
            order_date: Utc::now(),
        })
    }

    /// Called by the repository once the order is stored.
    pub fn with_id(mut self, id: OrderId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    pub fn buyer_id(&self) -> &str {
        &self.buyer_id
    }

    pub fn ship_to_address(&self) -> &Address {
        &self.ship_to_address
    }

    pub fn order_items(&self) -> &[OrderItem] {
        &self.order_items
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    /// Cannot overflow: `new` rejects orders whose total is not representable.
    pub fn total(&self) -> Money {
        self.order_items.iter().map(OrderItem::line_total).sum()
    }

    pub fn total_units(&self) -> u64 {
        self.order_items.iter().map(|item| u64::from(item.units)).sum()
    }
}
