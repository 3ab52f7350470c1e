//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which upstream endpoints are queried, timeouts,
//! and the sizing knobs of the batch and icon pipelines. The defaults point
//! at the public iTunes Search and Iconify APIs.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SearchError;

/// Configuration for catalog search operations.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour. Deserialises with missing fields
/// filled from the defaults, so it can be embedded in a host TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Application search endpoint (iTunes-compatible).
    pub app_store_endpoint: String,
    /// Icon API base URL. The search primitive lives at `<base>/search`.
    pub icon_endpoint: String,
    /// Base URL for resolvable vector assets: `<base>/<collection>:<name>.svg`.
    pub icon_asset_base: String,
    /// Per-call HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// User-Agent sent with every outbound request.
    pub user_agent: String,
    /// Number of popular terms queried per batch page.
    pub batch_terms_per_page: usize,
    /// `limit` sent upstream for each batch term.
    pub batch_per_term_limit: usize,
    /// Upper bound on the icon over-fetch size.
    pub icon_fetch_cap: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            app_store_endpoint: "https://itunes.apple.com/search".to_owned(),
            icon_endpoint: "https://api.iconify.design".to_owned(),
            icon_asset_base: "https://api.iconify.design".to_owned(),
            timeout_seconds: 10,
            user_agent: "Icon Hunter App".to_owned(),
            batch_terms_per_page: 10,
            batch_per_term_limit: 50,
            icon_fetch_cap: 200,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds`, `batch_terms_per_page`, `batch_per_term_limit`
    ///   and `icon_fetch_cap` must be greater than 0
    /// - every endpoint must be an absolute `http`/`https` URL
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.batch_terms_per_page == 0 {
            return Err(SearchError::Config(
                "batch_terms_per_page must be greater than 0".into(),
            ));
        }
        if self.batch_per_term_limit == 0 {
            return Err(SearchError::Config(
                "batch_per_term_limit must be greater than 0".into(),
            ));
        }
        if self.icon_fetch_cap == 0 {
            return Err(SearchError::Config(
                "icon_fetch_cap must be greater than 0".into(),
            ));
        }
        check_endpoint("app_store_endpoint", &self.app_store_endpoint)?;
        check_endpoint("icon_endpoint", &self.icon_endpoint)?;
        check_endpoint("icon_asset_base", &self.icon_asset_base)?;
        Ok(())
    }
}

fn check_endpoint(field: &str, value: &str) -> Result<(), SearchError> {
    let parsed = Url::parse(value)
        .map_err(|e| SearchError::Config(format!("{field} is not a valid URL: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(SearchError::Config(format!(
            "{field} must use http or https, got {other}"
        ))),
    }
}
