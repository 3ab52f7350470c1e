//! Response assembly: pure shaping of stage outputs into envelopes.
//!
//! Nothing here reorders items; ordering is settled by the ranking and
//! windowing stages before assembly.

use crate::fallback::FallbackPage;
use crate::types::{
    AppItem, AppSearchResponse, BatchAppsResponse, IconItem, IconSearchResponse, PageWindow,
};

use super::window::WindowSlice;

/// Category label reported when a batch request did not name one, or
/// named a blank one.
pub const MIXED_CATEGORY: &str = "mixed";

/// Build the batch envelope from ranked, merged items.
///
/// `ranked` is the full ranked set; it is truncated to `limit` here and
/// its pre-truncation length becomes `totalFound`.
pub fn batch_response(
    mut ranked: Vec<AppItem>,
    search_terms: Vec<String>,
    category: Option<&str>,
    limit: usize,
    start_index: usize,
    has_more: bool,
) -> BatchAppsResponse {
    let total_found = ranked.len();
    ranked.truncate(limit);
    BatchAppsResponse {
        result_count: ranked.len(),
        total_found,
        results: ranked,
        search_terms,
        category: category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(MIXED_CATEGORY)
            .to_owned(),
        limit,
        start_index,
        has_more,
    }
}

/// Build the single-term application envelope.
pub fn app_search_response(
    results: Vec<AppItem>,
    upstream_count: usize,
    term: &str,
    limit: usize,
    offset: usize,
) -> AppSearchResponse {
    AppSearchResponse {
        result_count: upstream_count,
        results,
        search_term: term.to_owned(),
        limit,
        offset,
    }
}

/// Build the icon envelope from a window slice.
///
/// `total` is the upstream-reported total, or the local count when the
/// upstream reported zero.
pub fn icon_response(
    slice: WindowSlice<IconItem>,
    upstream_total: usize,
    term: &str,
    window: PageWindow,
) -> IconSearchResponse {
    let total = if upstream_total > 0 {
        upstream_total
    } else {
        slice.available
    };
    IconSearchResponse {
        result_count: slice.items.len(),
        results: slice.items,
        search_term: term.to_owned(),
        offset: window.offset,
        limit: window.limit,
        has_more: slice.has_more,
        total,
    }
}

/// Build the icon envelope from a fallback page. `hasMore` is always false.
pub fn fallback_response(page: FallbackPage, term: &str, window: PageWindow) -> IconSearchResponse {
    IconSearchResponse {
        result_count: page.items.len(),
        results: page.items,
        search_term: term.to_owned(),
        offset: window.offset,
        limit: window.limit,
        has_more: false,
        total: page.total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_page;
    use crate::types::UNKNOWN_VERSION;

    fn make_app(id: u64) -> AppItem {
        AppItem {
            track_id: id,
            track_name: String::new(),
            artist_name: String::new(),
            bundle_id: String::new(),
            artwork_url60: String::new(),
            artwork_url100: String::new(),
            artwork_url512: String::new(),
            description: String::new(),
            primary_genre_name: String::new(),
            average_user_rating: 0.0,
            user_rating_count: 0,
            track_view_url: String::new(),
            currency: String::new(),
            price: 0.0,
            file_size_bytes: 0,
            version: UNKNOWN_VERSION.into(),
            search_term: None,
        }
    }

    #[test]
    fn batch_truncates_and_reports_total_found() {
        let apps: Vec<AppItem> = (0..5).map(make_app).collect();
        let resp = batch_response(apps, vec!["zoom".into()], None, 3, 0, true);
        assert_eq!(resp.result_count, 3);
        assert_eq!(resp.total_found, 5);
        assert_eq!(resp.category, "mixed");
        assert_eq!(
            resp.results.iter().map(|a| a.track_id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn batch_echoes_given_category() {
        let resp = batch_response(vec![], vec!["games".into()], Some("games"), 200, 0, true);
        assert_eq!(resp.category, "games");
        assert_eq!(resp.search_terms, vec!["games".to_owned()]);
    }

    #[test]
    fn blank_category_reported_as_mixed() {
        let resp = batch_response(vec![], vec![], Some(""), 200, 0, false);
        assert_eq!(resp.category, "mixed");
        let resp = batch_response(vec![], vec![], Some("   "), 200, 0, false);
        assert_eq!(resp.category, "mixed");
    }

    #[test]
    fn icon_total_falls_back_to_available() {
        let slice = WindowSlice {
            items: vec![],
            has_more: false,
            available: 4,
        };
        let resp = icon_response(slice, 0, "home", PageWindow::new(10, 10));
        assert_eq!(resp.total, 4);
        assert_eq!(resp.offset, 10);
    }

    #[test]
    fn fallback_never_has_more() {
        let page = fallback_page("action", PageWindow::new(0, 1), "https://x.test");
        let resp = fallback_response(page, "action", PageWindow::new(0, 1));
        assert_eq!(resp.result_count, 1);
        assert!(!resp.has_more);
        assert_eq!(resp.total, 7);
    }
}
