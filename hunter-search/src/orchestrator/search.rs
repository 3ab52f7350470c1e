//! Core pipelines: plan, fan out, merge, then rank or window.
//!
//! Every upstream call for a request is issued concurrently with
//! [`futures::future::join_all`] and the request completes once all of
//! them settle. No call can fail the whole batch; a failed term simply
//! contributes nothing. Dropping the returned future abandons every
//! in-flight call, and partial results are never surfaced.

use crate::catalog::{AppCatalog, AppQuery, IconCatalog};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::fallback::fallback_page;
use crate::planner::{plan_batch, plan_single};
use crate::types::{
    AppItem, AppSearchRequest, AppSearchResponse, BatchAppsRequest, BatchAppsResponse,
    IconSearchRequest, IconSearchResponse,
};

use super::assemble::{app_search_response, batch_response, fallback_response, icon_response};
use super::dedup::{merge_first_seen, TermOutcome};
use super::scoring::rank_by_popularity;
use super::window::{over_fetch_size, slice_window};

/// Run a batch application search.
///
/// # Pipeline
///
/// 1. Plan terms: a whitelisted category, or a slice of the popular terms
/// 2. Fan out one upstream call per term concurrently
/// 3. Merge in term order, first writer wins
/// 4. Rank by popularity (stable) and truncate to `limit`
///
/// # Errors
///
/// None from upstream: if every term fails the response is empty but
/// well-formed. Only an invalid HTTP configuration can fail this call,
/// and that is caught before the catalog is built.
pub async fn orchestrate_batch<C: AppCatalog>(
    catalog: &C,
    request: &BatchAppsRequest,
    config: &SearchConfig,
) -> Result<BatchAppsResponse, SearchError> {
    let plan = plan_batch(
        request.category.as_deref(),
        request.start_index,
        config.batch_terms_per_page,
    );
    tracing::debug!(terms = ?plan.terms, "batch plan");

    let futures: Vec<_> = plan
        .terms
        .iter()
        .map(|term| {
            let query = AppQuery {
                term: term.clone(),
                country: request.country.clone(),
                limit: config.batch_per_term_limit,
                offset: None,
            };
            async move {
                let result = catalog.search_apps(&query).await.map(|page| page.items);
                TermOutcome::new(query.term, result)
            }
        })
        .collect();

    let outcomes = futures::future::join_all(futures).await;

    for outcome in &outcomes {
        match &outcome.result {
            Ok(items) => {
                tracing::debug!(term = %outcome.term, count = items.len(), "term returned results");
            }
            Err(err) => {
                tracing::warn!(term = %outcome.term, error = %err, "term query failed");
            }
        }
    }

    let merged = merge_first_seen::<AppItem>(outcomes);
    if merged.all_failed() {
        tracing::warn!(
            failures = %merged.failure_summary(),
            "every batch term failed, returning empty result set"
        );
    }

    let ranked = rank_by_popularity(merged.items);

    Ok(batch_response(
        ranked,
        plan.terms,
        request.category.as_deref(),
        request.limit,
        request.start_index,
        plan.has_more,
    ))
}

/// Run a single-term application search using the upstream's native offset.
///
/// # Errors
///
/// Returns [`SearchError::InvalidRequest`] for a blank term, or
/// [`SearchError::Upstream`] if the one upstream call fails.
pub async fn orchestrate_app_search<C: AppCatalog>(
    catalog: &C,
    request: &AppSearchRequest,
) -> Result<AppSearchResponse, SearchError> {
    let term = sole_term(&request.term)?;

    let query = AppQuery {
        term: term.clone(),
        country: request.country.clone(),
        limit: request.limit,
        offset: Some(request.offset),
    };

    let page = catalog.search_apps(&query).await.map_err(|err| {
        tracing::warn!(error = %err, "app search failed");
        err
    })?;
    tracing::debug!(count = page.items.len(), "app search returned results");

    Ok(app_search_response(
        page.items,
        page.result_count,
        &term,
        request.limit,
        request.offset,
    ))
}

/// Run an icon search with emulated offset pagination.
///
/// # Pipeline
///
/// 1. Over-fetch `min((offset + limit) * 2, cap)` matches in one call
/// 2. De-duplicate by composite id, keeping upstream order
/// 3. Slice `[offset, offset + limit)` and compute `hasMore`
/// 4. Replace the page with the embedded fallback when the call failed,
///    or when a first page came back empty
///
/// # Errors
///
/// Returns [`SearchError::InvalidRequest`] for a blank term, or
/// [`SearchError::AllUpstreamsFailed`] when the upstream failed and the
/// fallback catalog has no match for the term.
pub async fn orchestrate_icons<C: IconCatalog>(
    catalog: &C,
    request: &IconSearchRequest,
    config: &SearchConfig,
) -> Result<IconSearchResponse, SearchError> {
    let term = sole_term(&request.term)?;
    let window = request.window();
    let fetch = over_fetch_size(window, config.icon_fetch_cap);

    tracing::debug!(offset = window.offset, limit = window.limit, fetch, "icon search");

    match catalog.search_icons(&term, fetch).await {
        Ok(page) => {
            let merged = merge_first_seen(vec![TermOutcome::new(term.clone(), Ok(page.items))]);
            let capped = fetch >= config.icon_fetch_cap;
            let slice = slice_window(&merged.items, window, page.total, capped);
            tracing::debug!(
                total = page.total,
                available = slice.available,
                returned = slice.items.len(),
                has_more = slice.has_more,
                "icon window sliced"
            );

            if slice.items.is_empty() && window.offset == 0 {
                tracing::info!("icon upstream returned nothing, serving fallback catalog");
                let fallback = fallback_page(&term, window, &config.icon_asset_base);
                return Ok(fallback_response(fallback, &term, window));
            }

            Ok(icon_response(slice, page.total, &term, window))
        }
        Err(err) => {
            tracing::warn!(error = %err, "icon upstream failed");
            let fallback = fallback_page(&term, window, &config.icon_asset_base);
            if fallback.total == 0 {
                return Err(SearchError::AllUpstreamsFailed(err.to_string()));
            }
            tracing::info!(matches = fallback.total, "serving fallback catalog");
            Ok(fallback_response(fallback, &term, window))
        }
    }
}

/// Validate and return the single planned term.
fn sole_term(term: &str) -> Result<String, SearchError> {
    plan_single(term)?
        .into_iter()
        .next()
        .ok_or_else(|| SearchError::Assembly("single-term plan was empty".into()))
}
