use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use reqwest::{header, StatusCode, Url};
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError, TransportError};

use super::super::types::{Deadline, RawPayload, RpcConfig};
use super::super::BlockchainClient;
use super::connection::{build_transport, parse_endpoint};
use super::protocol::{parse_response_body, JsonRpcRequest, JSONRPC_VERSION};

const METHOD_BLOCK_NUMBER: &str = "eth_blockNumber";
const METHOD_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";

/// JSON-RPC client for Ethereum-compatible endpoints (Polygon PoS) over
/// HTTP(S).
///
/// One call per invocation, no retries. Safe to share across tasks; the only
/// shared state is the pooled `reqwest::Client` and the request-id counter.
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    /// Create a client with its own transport.
    pub fn new(config: RpcConfig) -> Result<Self, CoreError> {
        let client = build_transport()?;
        Self::with_transport(config, client)
    }

    /// Create a client on top of an existing `reqwest::Client`, e.g. one
    /// shared with other components. `config.timeout` still bounds every
    /// request issued through this client.
    pub fn with_transport(config: RpcConfig, client: reqwest::Client) -> Result<Self, CoreError> {
        if config.timeout.is_zero() {
            return Err(CoreError::InvalidConfig(
                "RPC timeout must be greater than zero".to_owned(),
            ));
        }
        let url = parse_endpoint(&config.url)?;

        Ok(Self {
            client,
            url,
            timeout: config.timeout,
            next_id: AtomicU64::new(initial_request_id()),
        })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Perform one JSON-RPC call and return the undecoded `result` payload.
    ///
    /// Everything from serialization to envelope parsing runs under
    /// `deadline`. A deadline that has already passed fails before any
    /// network I/O.
    pub async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
        deadline: Deadline,
    ) -> Result<RawPayload, RpcError> {
        if method.is_empty() {
            return Err(
                TransportError::InvalidRequest("method name must not be empty".to_owned()).into(),
            );
        }
        if deadline.is_expired() {
            return Err(TransportError::DeadlineExceeded.into());
        }

        match tokio::time::timeout_at(deadline.instant(), self.dispatch(method, params)).await {
            Ok(result) => result,
            Err(_elapsed) => {
                debug!(rpc.method = method, "rpc call hit caller deadline");
                Err(TransportError::DeadlineExceeded.into())
            }
        }
    }

    async fn dispatch(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<RawPayload, RpcError> {
        let id = self.next_request_id();
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );
        let req = JsonRpcRequest {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id,
        };
        let payload = serde_json::to_vec(&req).map_err(TransportError::Serialize)?;

        let response = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .body(payload)
            .send()
            .await
            .map_err(TransportError::Http)?;
        let status = response.status();

        if status != StatusCode::OK {
            // Diagnostics only; a body that cannot be read is reported empty.
            let body = response.text().await.unwrap_or_default();
            debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc http failure");
            return Err(RpcError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(TransportError::Http)?;
        debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.id = id, rpc.method = method, body = %body, "rpc response body");

        parse_response_body(&body)
    }
}

#[async_trait]
impl BlockchainClient for HttpRpcClient {
    async fn latest_block_number(&self, deadline: Deadline) -> Result<String, CoreError> {
        let payload = self
            .call(METHOD_BLOCK_NUMBER, Vec::new(), deadline)
            .await?;
        serde_json::from_str(payload.get()).map_err(|source| CoreError::Decode {
            what: "block number",
            source,
        })
    }

    async fn block_by_number(
        &self,
        block_number: &str,
        deadline: Deadline,
    ) -> Result<RawPayload, CoreError> {
        // Full transaction objects are always requested.
        let params = vec![serde_json::json!(block_number), serde_json::json!(true)];
        Ok(self.call(METHOD_BLOCK_BY_NUMBER, params, deadline).await?)
    }
}

fn initial_request_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
