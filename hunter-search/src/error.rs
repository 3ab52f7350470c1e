//! Error types for the hunter-search crate.
//!
//! Messages are stable strings suitable for logs. Upstream response bodies
//! never appear in them; callers that surface errors to end users should
//! prefer [`SearchError::public_message`].

/// Errors that can occur during catalog search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request was malformed (blank term, unknown action). Rejected
    /// before any upstream call is made.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A single upstream call failed: non-success status, transport error,
    /// or a body that could not be decoded.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Every planned upstream call failed and no fallback could stand in.
    #[error("all upstream calls failed: {0}")]
    AllUpstreamsFailed(String),

    /// An internal invariant was violated while shaping a response.
    #[error("assembly error: {0}")]
    Assembly(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Returns `true` for errors caused by the caller (4xx-equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Message safe to hand back to a caller.
    ///
    /// Client errors keep their detail; everything else collapses to a
    /// generic message so upstream internals are not exposed.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidRequest(msg) => msg.clone(),
            Self::Upstream(_) | Self::AllUpstreamsFailed(_) => {
                "search failed, please try again later".to_owned()
            }
            Self::Assembly(_) | Self::Config(_) => "internal error".to_owned(),
        }
    }
}

/// Convenience type alias for hunter-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
