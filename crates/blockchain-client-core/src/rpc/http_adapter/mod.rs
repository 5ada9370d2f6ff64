//! Native JSON-RPC client for Ethereum-compatible endpoints.
//!
//! Implements [`BlockchainClient`](super::BlockchainClient) over HTTP(S)
//! using `reqwest`: one POST per call, bounded by a caller-supplied deadline,
//! with failures classified by the layer that produced them.

mod client;
mod connection;
mod protocol;

pub use client::HttpRpcClient;
