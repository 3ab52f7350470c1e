//! Trait definitions for the upstream catalog clients.
//!
//! Each upstream (the application directory, the icon directory)
//! implements one of these traits to provide a uniform, single-call
//! interface. Implementations never retry and never panic: every failure
//! comes back as a [`SearchError::Upstream`] so the orchestrator can apply
//! its degradation policy uniformly.

use crate::error::SearchError;
use crate::types::{AppItem, IconItem};

/// One outbound application search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppQuery {
    pub term: String,
    /// Two-letter storefront code, e.g. `US`.
    pub country: String,
    /// Page-size hint sent upstream.
    pub limit: usize,
    /// Native upstream offset. Batch mode leaves this unset.
    pub offset: Option<usize>,
}

/// Items returned by one application search, with the upstream count.
#[derive(Debug, Clone, Default)]
pub struct AppPage {
    pub items: Vec<AppItem>,
    /// Upstream-reported `resultCount`.
    pub result_count: usize,
}

/// Items returned by one icon search, with the upstream total.
#[derive(Debug, Clone, Default)]
pub struct IconPage {
    /// Icons in upstream order. May contain duplicates.
    pub items: Vec<IconItem>,
    /// Upstream-reported total number of matches.
    pub total: usize,
}

/// An application directory backend.
///
/// All implementations must be `Send + Sync` for concurrent fan-out.
pub trait AppCatalog: Send + Sync {
    /// Perform one application search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Upstream`] on non-success status, transport
    /// failure, or an undecodable body.
    fn search_apps(
        &self,
        query: &AppQuery,
    ) -> impl std::future::Future<Output = Result<AppPage, SearchError>> + Send;
}

/// An icon directory backend exposing only a fuzzy, size-capped search.
pub trait IconCatalog: Send + Sync {
    /// Return up to `limit` fuzzy matches for `term`, plus the upstream total.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Upstream`] on non-success status, transport
    /// failure, or an undecodable body.
    fn search_icons(
        &self,
        term: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<IconPage, SearchError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNKNOWN_VERSION;

    /// An in-memory app catalog for testing trait bounds and async execution.
    struct MockApps {
        items: Vec<AppItem>,
    }

    impl AppCatalog for MockApps {
        async fn search_apps(&self, query: &AppQuery) -> Result<AppPage, SearchError> {
            if self.items.is_empty() {
                return Err(SearchError::Upstream(format!("no data for {}", query.term)));
            }
            Ok(AppPage {
                items: self.items.clone(),
                result_count: self.items.len(),
            })
        }
    }

    fn query(term: &str) -> AppQuery {
        AppQuery {
            term: term.into(),
            country: "US".into(),
            limit: 50,
            offset: None,
        }
    }

    #[test]
    fn mock_catalog_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockApps>();
    }

    #[tokio::test]
    async fn mock_catalog_returns_page() {
        let item = AppItem {
            track_id: 1,
            track_name: "Zoom".into(),
            artist_name: "Zoom".into(),
            bundle_id: "us.zoom".into(),
            artwork_url60: String::new(),
            artwork_url100: String::new(),
            artwork_url512: String::new(),
            description: String::new(),
            primary_genre_name: "Business".into(),
            average_user_rating: 4.5,
            user_rating_count: 10,
            track_view_url: String::new(),
            currency: "USD".into(),
            price: 0.0,
            file_size_bytes: 0,
            version: UNKNOWN_VERSION.into(),
            search_term: None,
        };
        let catalog = MockApps { items: vec![item] };
        let page = catalog.search_apps(&query("zoom")).await.expect("page");
        assert_eq!(page.result_count, 1);
        assert_eq!(page.items[0].track_name, "Zoom");
    }

    #[tokio::test]
    async fn mock_catalog_propagates_errors() {
        let catalog = MockApps { items: vec![] };
        let err = catalog.search_apps(&query("zoom")).await.unwrap_err();
        assert!(err.to_string().contains("no data for zoom"));
    }
}
