//! Types shared by the RPC client and its callers.
//!
//! Method results are carried as [`RawPayload`]: raw JSON that has been
//! checked for well-formedness but not decoded. Each caller decides how much
//! of the payload it needs to understand.

use std::time::Duration;

use serde_json::value::RawValue;
use tokio::time::Instant;

/// Undecoded `result` member of a JSON-RPC response.
pub type RawPayload = Box<RawValue>;

/// Transport timeout applied to every outbound request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Stand-in for "no deadline" when a budget does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

// ==============================================================================
// Deadline
// ==============================================================================

/// Absolute point in time by which a call must have completed.
///
/// Passed explicitly through every call boundary; the RPC client gives up
/// and reports a transport failure once it passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(Instant);

impl Deadline {
    pub fn at(instant: Instant) -> Self {
        Self(instant)
    }

    /// A deadline `budget` from now. Budgets past what the clock can
    /// represent saturate to a far-future instant.
    pub fn after(budget: Duration) -> Self {
        let now = Instant::now();
        Self(now.checked_add(budget).unwrap_or_else(|| now + FAR_FUTURE))
    }

    pub fn instant(self) -> Instant {
        self.0
    }

    pub fn is_expired(self) -> bool {
        Instant::now() >= self.0
    }
}

// ==============================================================================
// Client Configuration
// ==============================================================================

/// Endpoint and transport settings for [`super::HttpRpcClient`].
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Full HTTP(S) URL of the JSON-RPC endpoint.
    pub url: String,
    /// Upper bound on each outbound request, independent of the caller's
    /// deadline.
    pub timeout: Duration,
}

impl RpcConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
