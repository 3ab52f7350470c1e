//! Offset pagination emulated over a limit-only upstream search.
//!
//! The icon upstream accepts a single `limit` and has no offset. To serve
//! `[offset, offset + limit)` the stage over-fetches `2 * (offset + limit)`
//! items (capped), then slices the de-duplicated list locally. There is no
//! cursor state: every page is a fresh, independent upstream call.
//!
//! Once a request hits the fetch cap, every later page is served from the
//! same capped list, so `has_more` only looks at what was fetched.

use crate::types::PageWindow;

/// Multiplier applied to the window end when sizing the upstream request.
pub const OVER_FETCH_FACTOR: usize = 2;

/// One window sliced from a locally available list.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSlice<T> {
    /// `full[offset..offset + limit]`, clamped to the list.
    pub items: Vec<T>,
    /// More items exist locally past the window, or upstream reports more
    /// than was fetched and the fetch was below the cap.
    pub has_more: bool,
    /// Number of items available locally.
    pub available: usize,
}

/// Number of items to request upstream for `window`.
///
/// `min((offset + limit) * 2, cap)`, never less than 1.
pub fn over_fetch_size(window: PageWindow, cap: usize) -> usize {
    window
        .end()
        .saturating_mul(OVER_FETCH_FACTOR)
        .min(cap)
        .max(1)
}

/// Slice `window` out of `full` and compute `has_more`.
///
/// `upstream_total` is the upstream-reported match count; when it exceeds
/// `full.len()` a larger request could surface more items, unless
/// `fetch_capped` says the request was already as large as allowed.
pub fn slice_window<T: Clone>(
    full: &[T],
    window: PageWindow,
    upstream_total: usize,
    fetch_capped: bool,
) -> WindowSlice<T> {
    let available = full.len();
    let start = window.offset.min(available);
    let end = window.end().min(available);
    let items = full[start..end].to_vec();
    let has_more = window.end() < available || (!fetch_capped && upstream_total > available);

    WindowSlice {
        items,
        has_more,
        available,
    }
}
