use reqwest::Url;

use crate::error::CoreError;

const CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

pub(super) fn parse_endpoint(endpoint: &str) -> Result<Url, CoreError> {
    let parsed = Url::parse(endpoint).map_err(|e| {
        CoreError::InvalidConfig(format!(
            "invalid RPC endpoint `{endpoint}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CoreError::InvalidConfig(format!(
            "unsupported RPC endpoint scheme `{other}`; expected http or https"
        ))),
    }
}

/// Build the shared transport. One `reqwest::Client` is reused for every call
/// so its connection pool is shared across concurrent requests. Timeouts are
/// applied per request, so injected clients get the same bound.
pub(super) fn build_transport() -> Result<reqwest::Client, CoreError> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .tcp_nodelay(true)
        .build()
        .map_err(|e| CoreError::InvalidConfig(format!("failed to build HTTP client: {e}")))
}
