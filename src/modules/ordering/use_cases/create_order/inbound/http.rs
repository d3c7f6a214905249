use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::ordering::core::address::Address;
use crate::modules::ordering::use_cases::create_order::command::CreateOrder;
use crate::modules::ordering::use_cases::create_order::errors::ErrorKind;
use crate::shared::core::primitives::{BasketId, OrderId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ShippingAddressBody {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Deserialize)]
pub struct CreateOrderBody {
    pub basket_id: BasketId,
    pub shipping_address: ShippingAddressBody,
}

#[derive(Serialize)]
pub struct CreateOrderResponse {
    pub order_id: OrderId,
}

#[derive(Serialize)]
pub struct OrderPlacedWithErrorResponse {
    pub order_id: OrderId,
    pub error: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateOrderBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let address = body.shipping_address;
    let command = CreateOrder {
        basket_id: body.basket_id,
        shipping_address: Address::new(address.street, address.city, address.state, address.zip_code),
    };

    match state.create_order_handler.handle(command).await {
        Ok(order) => match order.id() {
            Some(order_id) => (StatusCode::CREATED, Json(CreateOrderResponse { order_id })).into_response(),
            None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        },
        Err(err) => match (err.kind(), err.persisted_order_id()) {
            (ErrorKind::NotFound, _) => StatusCode::NOT_FOUND.into_response(),
            (ErrorKind::InvalidOperation, _) => StatusCode::CONFLICT.into_response(),
            (ErrorKind::ExternalService, Some(order_id)) => (
                StatusCode::BAD_GATEWAY,
                Json(OrderPlacedWithErrorResponse {
                    order_id,
                    error: err.to_string(),
                }),
            )
                .into_response(),
            _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        },
    }
}
