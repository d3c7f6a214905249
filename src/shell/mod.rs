// Composition root for the ordering bounded context.
//
// Responsibilities
// - Read config from environment.
// - Resolve secrets and choose the storage backend.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose the HTTP and GraphQL routers to main.

pub mod config;
pub mod dependencies;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;

use axum::Router;
use state::AppState;
use tower_http::trace::TraceLayer;

pub fn app(state: AppState) -> Router {
    http::router(state.clone())
        .merge(graphql::router(graphql::build_schema(state)))
        .layer(TraceLayer::new_for_http())
}
