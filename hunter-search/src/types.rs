//! Core types: catalog items, request shapes and response envelopes.
//!
//! Field names serialise in camelCase to match the wire contract the
//! callers already consume.

use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Version string used when the upstream omits one.
pub const UNKNOWN_VERSION: &str = "unknown";

/// An item that has a stable identity inside one merged result set.
pub trait CatalogItem {
    /// Identity type. Two items with equal identity are duplicates.
    type Id: Eq + Hash + Clone;

    /// Returns this item's identity.
    fn identity(&self) -> Self::Id;

    /// Records the query term that produced the kept instance.
    ///
    /// The default does nothing; variants that report attribution override it.
    fn attribute_to(&mut self, _term: &str) {}
}

/// A software application from the application directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppItem {
    /// Numeric catalog id (identity).
    pub track_id: u64,
    pub track_name: String,
    pub artist_name: String,
    pub bundle_id: String,
    pub artwork_url60: String,
    pub artwork_url100: String,
    pub artwork_url512: String,
    pub description: String,
    pub primary_genre_name: String,
    /// Average rating in `[0, 5]`; 0 when the upstream omits it.
    pub average_user_rating: f64,
    /// Number of ratings; 0 when the upstream omits it.
    pub user_rating_count: u64,
    pub track_view_url: String,
    pub currency: String,
    pub price: f64,
    pub file_size_bytes: u64,
    /// Version string, [`UNKNOWN_VERSION`] when absent.
    pub version: String,
    /// Query term that produced this item in batch mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl CatalogItem for AppItem {
    type Id = u64;

    fn identity(&self) -> u64 {
        self.track_id
    }

    fn attribute_to(&mut self, term: &str) {
        self.search_term = Some(term.to_owned());
    }
}

/// A vector icon from the icon directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconItem {
    /// Composite identity `"<collectionId>:<iconName>"`.
    pub id: String,
    /// Display name with `-` and `_` replaced by spaces.
    pub name: String,
    /// Resolvable vector-asset URL.
    pub url: String,
    /// Collection display name.
    pub source: String,
    pub category: String,
    pub license: String,
    pub author: String,
    pub download_url: String,
}

impl CatalogItem for IconItem {
    type Id = String;

    fn identity(&self) -> String {
        self.id.clone()
    }
}

/// A `{offset, limit}` window into a merged, ordered superset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl PageWindow {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Exclusive end index of the window.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.limit)
    }

    /// The window immediately after this one.
    pub fn next(&self) -> Self {
        Self::new(self.end(), self.limit)
    }
}

fn default_app_limit() -> usize {
    50
}

fn default_batch_limit() -> usize {
    200
}

fn default_country() -> String {
    "US".to_owned()
}

/// Single-term application search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSearchRequest {
    /// Required, non-blank.
    #[serde(default)]
    pub term: String,
    #[serde(default = "default_app_limit")]
    pub limit: usize,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub offset: usize,
}

impl AppSearchRequest {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            limit: default_app_limit(),
            country: default_country(),
            offset: 0,
        }
    }
}

/// Batch application search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAppsRequest {
    /// Takes effect only when it matches a known category.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_batch_limit")]
    pub limit: usize,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub start_index: usize,
}

impl BatchAppsRequest {
    pub fn new() -> Self {
        Self {
            category: None,
            limit: default_batch_limit(),
            country: default_country(),
            start_index: 0,
        }
    }
}

impl Default for BatchAppsRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Icon search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSearchRequest {
    /// Required, non-blank.
    #[serde(default)]
    pub term: String,
    #[serde(default = "default_app_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl IconSearchRequest {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            limit: default_app_limit(),
            offset: 0,
        }
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.offset, self.limit)
    }
}

/// Response envelope for single-term application search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSearchResponse {
    /// Upstream-reported result count.
    pub result_count: usize,
    pub results: Vec<AppItem>,
    pub search_term: String,
    pub limit: usize,
    pub offset: usize,
}

/// Response envelope for batch application search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAppsResponse {
    pub result_count: usize,
    /// Distinct applications found before truncation to `limit`.
    pub total_found: usize,
    pub results: Vec<AppItem>,
    pub search_terms: Vec<String>,
    /// The caller's category, or `"mixed"` when none was given.
    pub category: String,
    pub limit: usize,
    pub start_index: usize,
    pub has_more: bool,
}

/// Response envelope for icon search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSearchResponse {
    pub result_count: usize,
    pub results: Vec<IconItem>,
    pub search_term: String,
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
    pub total: usize,
}
