use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{any, get},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::dns_query_get))
        .route("/dns-query", any(handlers::dns_query_get))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
