#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The node answered with a success envelope whose payload does not have
    /// the shape the method promises.
    #[error("failed to unmarshal {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure of a single JSON-RPC call, classified by the layer that failed.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Nothing usable came back: the request never left, the connection
    /// failed, the deadline fired, or the body could not be read.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] TransportError),

    /// The node answered with a non-200 status. The body is kept verbatim
    /// for diagnostics and is not parsed as JSON-RPC.
    #[error("RPC request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("failed to unmarshal response: {0}")]
    InvalidEnvelope(String),

    /// Well-formed envelope carrying a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Server { code: i64, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to marshal request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to create request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl CoreError {
    /// Borrow the underlying RPC failure, if this error came from the wire.
    pub fn as_rpc(&self) -> Option<&RpcError> {
        match self {
            Self::Rpc(err) => Some(err),
            _ => None,
        }
    }
}
