use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use blockchain_client_core::rpc::{Deadline, RawPayload};

use super::error::{map_core_error, AppError};
use super::SharedState;

// ==============================================================================
// DTOs
// ==============================================================================

#[derive(Serialize)]
pub(super) struct BlockNumberResponse {
    /// Latest block number as a hex quantity, e.g. `0x41ce50d`.
    #[serde(rename = "blockNumber")]
    block_number: String,
}

/// The node's block document is embedded verbatim.
#[derive(Serialize)]
pub(super) struct BlockResponse {
    block: RawPayload,
}

// ==============================================================================
// Handlers
// ==============================================================================

pub(super) async fn get_block_number(
    State(state): State<SharedState>,
) -> Result<Json<BlockNumberResponse>, AppError> {
    let deadline = Deadline::after(state.request_timeout);
    let block_number = state
        .client
        .latest_block_number(deadline)
        .await
        .map_err(map_core_error)?;

    Ok(Json(BlockNumberResponse { block_number }))
}

pub(super) async fn get_block_by_number(
    State(state): State<SharedState>,
    Path(number): Path<String>,
) -> Result<Json<BlockResponse>, AppError> {
    let deadline = Deadline::after(state.request_timeout);
    let block = state
        .client
        .block_by_number(&number, deadline)
        .await
        .map_err(map_core_error)?;

    Ok(Json(BlockResponse { block }))
}
