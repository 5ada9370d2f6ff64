use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RpcError;
use crate::rpc::types::RawPayload;

pub(super) const JSONRPC_VERSION: &str = "2.0";

#[derive(Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) method: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(super) params: Vec<serde_json::Value>,
    pub(super) id: u64,
}

/// Top-level members of a response envelope, kept undecoded.
///
/// A derived struct would also accept a JSON array and fill its fields by
/// position; a map only accepts an object. `jsonrpc` and `id` are not
/// validated.
type EnvelopeMembers = HashMap<String, RawPayload>;

#[derive(Debug, Deserialize)]
pub(super) struct JsonRpcErrorObject {
    pub(super) code: i64,
    pub(super) message: String,
}

fn invalid_envelope(err: serde_json::Error) -> RpcError {
    RpcError::InvalidEnvelope(err.to_string())
}

/// Interpret a 200 response body as a JSON-RPC response envelope.
///
/// An error object wins over a result when a node sends both, and a
/// `"error": null` member counts as absent. A present `"result": null` is
/// still a result. An envelope with neither is a protocol violation and
/// reported as malformed.
pub(super) fn parse_response_body(body: &str) -> Result<RawPayload, RpcError> {
    let mut members: EnvelopeMembers = serde_json::from_str(body).map_err(invalid_envelope)?;

    if let Some(raw_error) = members.remove("error") {
        let error: Option<JsonRpcErrorObject> =
            serde_json::from_str(raw_error.get()).map_err(invalid_envelope)?;
        if let Some(err) = error {
            return Err(RpcError::Server {
                code: err.code,
                message: err.message,
            });
        }
    }

    members
        .remove("result")
        .ok_or_else(|| RpcError::InvalidEnvelope("missing both result and error".to_owned()))
}
