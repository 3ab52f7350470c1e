//! Shared HTTP client for upstream catalog requests.
//!
//! Provides a configured [`reqwest::Client`] with the configured
//! User-Agent, timeout and transparent decompression.

use crate::config::SearchConfig;
use crate::error::SearchError;
use std::time::Duration;

/// Build a [`reqwest::Client`] configured for upstream catalog calls.
///
/// The client has:
/// - Timeout from config (applies per call)
/// - User-Agent from config
/// - Brotli and gzip decompression
///
/// No retry policy is installed; a failed call is reported once.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| SearchError::Config(format!("failed to build HTTP client: {e}")))
}
