//! Iconify icon catalog.
//!
//! The Iconify search primitive (`GET <base>/search?query=&limit=`) has no
//! offset parameter: it returns up to `limit` fuzzy matches as
//! `"collection:name"` strings, a `total` count, and per-collection
//! metadata used to fill in source, category, license and author.

use std::collections::HashMap;

use serde::Deserialize;
use url::Url;

use crate::catalog::{IconCatalog, IconPage};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::IconItem;

const DEFAULT_CATEGORY: &str = "General";
const UNKNOWN: &str = "Unknown";

/// Icon catalog backed by the Iconify API.
#[derive(Debug, Clone)]
pub struct IconifyCatalog {
    client: reqwest::Client,
    endpoint: String,
    asset_base: String,
}

impl IconifyCatalog {
    /// Build a catalog using the endpoints and HTTP settings from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_client(config)?,
            endpoint: config.icon_endpoint.clone(),
            asset_base: config.icon_asset_base.clone(),
        })
    }

    fn request_url(&self, term: &str, limit: usize) -> Result<Url, SearchError> {
        let base = format!("{}/search", self.endpoint.trim_end_matches('/'));
        let limit = limit.to_string();
        Url::parse_with_params(&base, &[("query", term), ("limit", limit.as_str())])
            .map_err(|e| SearchError::Config(format!("invalid icon_endpoint: {e}")))
    }
}

impl IconCatalog for IconifyCatalog {
    async fn search_icons(&self, term: &str, limit: usize) -> Result<IconPage, SearchError> {
        tracing::trace!(term, limit, "icon catalog search");

        let url = self.request_url(term, limit)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Upstream(format!("icon search request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Upstream(format!("icon search HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Upstream(format!("icon search response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "icon catalog response received");

        parse_icon_payload(&body, &self.asset_base)
    }
}

#[derive(Debug, Deserialize)]
struct RawIconResponse {
    #[serde(default)]
    icons: Vec<String>,
    #[serde(default)]
    total: Option<usize>,
    #[serde(default)]
    collections: HashMap<String, RawCollection>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCollection {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    author: Option<Attribution>,
    #[serde(default)]
    license: Option<Attribution>,
}

/// Collection author/license: either a bare string or an object such as
/// `{"name": ..., "url": ...}` or `{"title": ..., "spdx": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Attribution {
    Text(String),
    Detailed {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        title: Option<String>,
    },
    Other(serde_json::Value),
}

impl Attribution {
    fn label(&self) -> Option<&str> {
        let label = match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Detailed { name, title } => name.as_deref().or(title.as_deref()),
            Self::Other(_) => None,
        };
        label.filter(|s| !s.trim().is_empty())
    }
}

/// Replace the `-` and `_` separators of an icon name with spaces.
pub fn display_name(icon_name: &str) -> String {
    icon_name.replace(['-', '_'], " ")
}

/// Parse an icon search response body.
///
/// Entries that do not split into a non-empty collection id and icon name
/// are skipped. Missing collection metadata falls back to the collection
/// id for the source, `General` for the category and `Unknown` for
/// license and author. A missing `total` falls back to the icon count.
///
/// # Errors
///
/// Returns [`SearchError::Upstream`] if the body is not the expected JSON shape.
pub fn parse_icon_payload(body: &str, asset_base: &str) -> Result<IconPage, SearchError> {
    let raw: RawIconResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Upstream(format!("malformed icon search payload: {e}")))?;

    let asset_base = asset_base.trim_end_matches('/');
    let empty = RawCollection::default();

    let items: Vec<IconItem> = raw
        .icons
        .iter()
        .filter_map(|icon_id| {
            let (collection_id, rest) = icon_id.split_once(':')?;
            let icon_name = rest.split(':').next().unwrap_or_default();
            if collection_id.is_empty() || icon_name.is_empty() {
                return None;
            }
            let collection = raw.collections.get(collection_id).unwrap_or(&empty);
            let url = format!("{asset_base}/{icon_id}.svg");
            Some(IconItem {
                id: icon_id.clone(),
                name: display_name(icon_name),
                url: url.clone(),
                source: collection
                    .name
                    .clone()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| collection_id.to_owned()),
                category: collection
                    .category
                    .clone()
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
                license: collection
                    .license
                    .as_ref()
                    .and_then(Attribution::label)
                    .unwrap_or(UNKNOWN)
                    .to_owned(),
                author: collection
                    .author
                    .as_ref()
                    .and_then(Attribution::label)
                    .unwrap_or(UNKNOWN)
                    .to_owned(),
                download_url: url,
            })
        })
        .collect();

    let total = raw.total.unwrap_or(raw.icons.len());
    Ok(IconPage { items, total })
}
