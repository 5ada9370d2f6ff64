use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use blockchain_client_core::CoreError;

// ==============================================================================
// Error Type
// ==============================================================================

pub(crate) enum AppError {
    NotFound(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Every upstream failure is reported as a 500 carrying the error's message;
/// the kind is only visible in the logs.
pub(super) fn map_core_error(err: CoreError) -> AppError {
    tracing::warn!(error = %err, kind = core_error_kind(&err), "upstream query failed");
    AppError::Internal(err.to_string())
}

fn core_error_kind(err: &CoreError) -> &'static str {
    use blockchain_client_core::RpcError;

    match err {
        CoreError::Rpc(RpcError::Transport(_)) => "transport",
        CoreError::Rpc(RpcError::HttpStatus { .. }) => "http_status",
        CoreError::Rpc(RpcError::InvalidEnvelope(_)) => "envelope",
        CoreError::Rpc(RpcError::Server { .. }) => "rpc",
        CoreError::Decode { .. } => "decode",
        CoreError::InvalidConfig(_) => "config",
    }
}
