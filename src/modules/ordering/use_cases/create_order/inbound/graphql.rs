use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult};

use crate::modules::ordering::core::address::Address;
use crate::modules::ordering::use_cases::create_order::command::CreateOrder;
use crate::modules::ordering::use_cases::create_order::errors::ApplicationError;
use crate::shared::core::primitives::BasketId;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_order(
        &self,
        context: &Context<'_>,
        basket_id: BasketId,
        street: String,
        city: String,
        state: String,
        zip_code: String,
    ) -> GqlResult<ID> {
        let app_state = context.data_unchecked::<AppState>();

        let command = CreateOrder {
            basket_id,
            shipping_address: Address::new(street, city, state, zip_code),
        };

        let order = app_state
            .create_order_handler
            .handle(command)
            .await
            .map_err(to_graphql_error)?;

        order
            .id()
            .map(|order_id| ID(order_id.to_string()))
            .ok_or_else(|| async_graphql::Error::new("stored order has no id"))
    }
}

fn to_graphql_error(err: ApplicationError) -> async_graphql::Error {
    let kind = format!("{:?}", err.kind());
    let order_id = err.persisted_order_id();
    async_graphql::Error::new(err.to_string()).extend_with(|_, extensions| {
        extensions.set("kind", kind);
        if let Some(order_id) = order_id {
            extensions.set("orderId", order_id.to_string());
        }
    })
}
