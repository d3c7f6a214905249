use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::core::primitives::OrderId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListOrdersParams {
    pub buyer_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListOrdersParams>,
) -> impl IntoResponse {
    match state.order_queries.list_by_buyer_id(&params.buyer_id).await {
        Ok(orders) => Json(orders).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> impl IntoResponse {
    match state.order_queries.get_by_id(order_id).await {
        Ok(Some(order)) => Json(order).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
