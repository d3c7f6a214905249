use crate::shared::core::primitives::{CatalogItemId, Money};

/// Sellable product as the catalog currently knows it. Read only for ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub name: String,
    pub description: String,
    pub price: Money,
    /// Stored picture reference, possibly relative or carrying the placeholder host.
    pub picture_uri: String,
}

impl CatalogItem {
    pub fn new(
        id: CatalogItemId,
        name: impl Into<String>,
        price: Money,
        picture_uri: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            picture_uri: picture_uri.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
