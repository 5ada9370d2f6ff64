pub mod error;
pub mod rpc;

pub use error::{CoreError, RpcError, TransportError};
pub use rpc::{BlockchainClient, Deadline, HttpRpcClient, RawPayload, RpcConfig};
