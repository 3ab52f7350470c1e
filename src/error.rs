//! Error types for the Icon Hunter host.

use hunter_search::SearchError;

/// Top-level error type for the host process.
#[derive(Debug, thiserror::Error)]
pub enum HunterError {
    /// Configuration error (unreadable TOML, invalid values).
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by the search core.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// HTTP server error (bind, serve).
    #[error("server error: {0}")]
    Server(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, HunterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes() {
        assert_eq!(
            HunterError::Config("bad port".into()).to_string(),
            "config error: bad port"
        );
        assert_eq!(
            HunterError::Server("bind failed".into()).to_string(),
            "server error: bind failed"
        );
    }

    #[test]
    fn search_error_converts() {
        let err: HunterError = SearchError::Config("timeout_seconds must be > 0".into()).into();
        assert!(matches!(err, HunterError::Search(_)));
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: HunterError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
