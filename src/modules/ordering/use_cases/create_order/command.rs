use crate::modules::ordering::core::address::Address;
use crate::shared::core::primitives::BasketId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrder {
    pub basket_id: BasketId,
    pub shipping_address: Address,
}
