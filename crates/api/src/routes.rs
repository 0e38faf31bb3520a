use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/lookup/{host}", get(handlers::lookup_default_type))
        .route("/lookup/{host}/{record_type}", get(handlers::lookup))
        .with_state(state)
}
