mod block;
mod error;

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use blockchain_client_core::rpc::BlockchainClient;

// ==============================================================================
// Application State
// ==============================================================================

pub struct AppState {
    pub client: Arc<dyn BlockchainClient>,
    /// Deadline budget for the upstream call behind each request.
    pub request_timeout: Duration,
}

type SharedState = Arc<AppState>;

// ==============================================================================
// Router
// ==============================================================================

pub fn build_router(state: AppState) -> Router {
    let shared = Arc::new(state);

    // `/block/number` is a static segment and wins over `/block/{number}`.
    Router::new()
        .route("/health", get(health))
        .route("/block/number", get(block::get_block_number))
        .route("/block/{number}", get(block::get_block_by_number))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn route_not_found() -> error::AppError {
    error::AppError::NotFound("route not found".to_string())
}
