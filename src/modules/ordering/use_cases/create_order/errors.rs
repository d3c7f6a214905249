use crate::modules::ordering::adapters::outbound::repositories::RepositoryError;
use crate::modules::ordering::core::order::OrderError;
use crate::shared::core::primitives::{BasketId, CatalogItemId, OrderId};
use crate::shared::infrastructure::notification::NotificationError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidOperation,
    ExternalService,
    Internal,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("basket {0} not found")]
    BasketNotFound(BasketId),

    #[error("catalog item {0} not found")]
    CatalogItemNotFound(CatalogItemId),

    #[error("cannot create an order from an empty basket")]
    EmptyBasket,

    #[error("order rejected: {0}")]
    InvalidOrder(#[from] OrderError),

    #[error(transparent)]
    Storage(#[from] RepositoryError),

    /// The order is stored; only the notification after it failed.
    #[error("order {order_id} was placed but notifying failed: {source}")]
    NotificationFailed {
        order_id: OrderId,
        #[source]
        source: NotificationError,
    },
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::BasketNotFound(_) | ApplicationError::CatalogItemNotFound(_) => {
                ErrorKind::NotFound
            }
            ApplicationError::EmptyBasket | ApplicationError::InvalidOrder(_) => {
                ErrorKind::InvalidOperation
            }
            ApplicationError::NotificationFailed { .. } => ErrorKind::ExternalService,
            ApplicationError::Storage(_) => ErrorKind::Internal,
        }
    }

    /// Id of the order that was persisted before the failure, if any.
    pub fn persisted_order_id(&self) -> Option<OrderId> {
        match self {
            ApplicationError::NotificationFailed { order_id, .. } => Some(*order_id),
            _ => None,
        }
    }
}
