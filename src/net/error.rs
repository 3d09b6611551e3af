//! Repository fetch failures.

/// Why a repository load produced no data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    /// The request never produced a response (offline, DNS, CORS).
    #[error("request failed: {0}")]
    Network(String),

    /// The API answered with a non-2xx status (rate limit, unknown user).
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of repositories.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("no response after {after_ms} ms")]
    Timeout { after_ms: u64 },

    /// HTTP is only wired up in the browser build.
    #[error("repository API unavailable outside the browser")]
    Unavailable,
}
