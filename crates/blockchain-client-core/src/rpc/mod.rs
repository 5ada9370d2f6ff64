//! Polygon JSON-RPC abstraction layer.
//!
//! Defines the [`BlockchainClient`] trait consumed by the HTTP gateway and
//! provides the HTTP JSON-RPC implementation ([`HttpRpcClient`]).

mod http_adapter;
pub mod types;

pub use http_adapter::HttpRpcClient;
pub use types::{Deadline, RawPayload, RpcConfig};

use async_trait::async_trait;

use crate::error::CoreError;

/// Chain queries the gateway needs from a node.
///
/// Every call takes an explicit [`Deadline`]; implementations must give up
/// and return an error once it passes.
#[async_trait]
pub trait BlockchainClient: Send + Sync {
    /// Current chain head as the node reports it, a hex quantity such as
    /// `"0x41ce50d"`.
    async fn latest_block_number(&self, deadline: Deadline) -> Result<String, CoreError>;

    /// Block at `block_number` with full transaction objects, as undecoded
    /// JSON. `block_number` is forwarded to the node without validation.
    async fn block_by_number(
        &self,
        block_number: &str,
        deadline: Deadline,
    ) -> Result<RawPayload, CoreError>;
}
