//! Term planning: which upstream query terms a request fans out to.
//!
//! The category whitelist and the popular-term list are process-wide,
//! read-only tables. Batch requests either query a single whitelisted
//! category or a fixed-size slice of the popular terms; icon requests
//! always query exactly the caller's term.

use crate::error::SearchError;

/// Category names that a batch request may target directly.
pub const POPULAR_CATEGORIES: &[&str] = &[
    "games",
    "social networking",
    "entertainment",
    "utilities",
    "productivity",
    "music",
    "photo & video",
    "travel",
    "news",
    "business",
    "education",
    "lifestyle",
    "shopping",
    "sports",
    "weather",
    "health & fitness",
];

/// Ordered list of popular application terms sliced by batch pages.
pub const POPULAR_TERMS: &[&str] = &[
    "instagram",
    "tiktok",
    "spotify",
    "whatsapp",
    "telegram",
    "zoom",
    "netflix",
    "youtube",
    "facebook",
    "twitter",
    "linkedin",
    "uber",
    "airbnb",
    "amazon",
    "microsoft",
    "google",
    "apple",
    "adobe",
    "snapchat",
    "discord",
    "reddit",
    "pinterest",
    "dropbox",
    "slack",
];

/// The outcome of planning a batch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    /// Terms to query, in the order used for dedup attribution.
    pub terms: Vec<String>,
    /// Whether the popular-term list continues past this page.
    pub has_more: bool,
}

/// Returns `true` if `category` names a whitelisted category (case-insensitive).
pub fn is_known_category(category: &str) -> bool {
    let lowered = category.to_lowercase();
    POPULAR_CATEGORIES.contains(&lowered.as_str())
}

/// Plan a batch request.
///
/// A whitelisted `category` yields exactly `[category]` as given by the
/// caller. Otherwise the plan is `POPULAR_TERMS[start_index..start_index + page_size]`,
/// shortened at the end of the list with no wraparound; a start index at
/// or past the end yields an empty plan.
///
/// `has_more` reflects the popular-term list only, so it is computed the
/// same way whether or not a category took effect.
pub fn plan_batch(category: Option<&str>, start_index: usize, page_size: usize) -> BatchPlan {
    let page_end = start_index.saturating_add(page_size);
    let has_more = POPULAR_TERMS.len() > page_end;

    if let Some(category) = category.filter(|c| is_known_category(c)) {
        return BatchPlan {
            terms: vec![category.to_owned()],
            has_more,
        };
    }

    let start = start_index.min(POPULAR_TERMS.len());
    let end = page_end.min(POPULAR_TERMS.len());
    let terms = POPULAR_TERMS[start..end]
        .iter()
        .map(|t| (*t).to_owned())
        .collect();

    BatchPlan { terms, has_more }
}

/// Plan a single-term request, rejecting blank terms.
///
/// # Errors
///
/// Returns [`SearchError::InvalidRequest`] if `term` is empty or whitespace.
pub fn plan_single(term: &str) -> Result<Vec<String>, SearchError> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Err(SearchError::InvalidRequest("missing search term".into()));
    }
    Ok(vec![trimmed.to_owned()])
}

/// The category whitelist, for listing to callers.
pub fn categories() -> Vec<String> {
    POPULAR_CATEGORIES.iter().map(|c| (*c).to_owned()).collect()
}

/// The popular-term list, for listing to callers.
pub fn popular_terms() -> Vec<String> {
    POPULAR_TERMS.iter().map(|t| (*t).to_owned()).collect()
}
