use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::ordering::use_cases::create_order::inbound::http as create_http;
use crate::modules::ordering::use_cases::list_orders_by_buyer::inbound::http as list_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/orders", post(create_http::handle).get(list_http::handle))
        .route("/orders/{order_id}", get(list_http::get_one))
        .with_state(state)
}
