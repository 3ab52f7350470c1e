//! # hunter-search
//!
//! Result aggregation and pagination core for Icon Hunter.
//!
//! This crate sits in front of two unrelated public catalogs, an
//! application directory (iTunes Search) and a vector-icon directory
//! (Iconify), and turns their raw search primitives into stable,
//! paginated result sets.
//!
//! ## Design
//!
//! - Batch application mode fans out one upstream call per planned term
//!   concurrently, merges first-writer-wins by catalog id, and ranks by
//!   `rating * ln(count + 1)` with a stable sort
//! - Icon mode emulates `{offset, limit}` pagination over a limit-only
//!   fuzzy search by over-fetching and slicing locally
//! - Graceful degradation: failed terms contribute nothing; a failed or
//!   empty icon first page is replaced by a small embedded catalog
//! - Stateless: no cache, no cursor, no retries. Every call re-queries
//!   upstream
//!
//! ## Security
//!
//! - No network listeners; routing lives in the host crate
//! - Query text is logged only at trace/debug level
//! - Upstream error detail never reaches [`SearchError::public_message`]

pub mod catalog;
pub mod catalogs;
pub mod config;
pub mod error;
pub mod fallback;
pub mod http;
pub mod orchestrator;
pub mod planner;
pub mod types;

pub use catalog::{AppCatalog, IconCatalog};
pub use catalogs::{ITunesCatalog, IconifyCatalog};
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use types::{
    AppItem, AppSearchRequest, AppSearchResponse, BatchAppsRequest, BatchAppsResponse, IconItem,
    IconSearchRequest, IconSearchResponse,
};

use orchestrator::search::{orchestrate_app_search, orchestrate_batch, orchestrate_icons};

/// A validated configuration bound to one app catalog and one icon catalog.
///
/// Construct once and share (e.g. behind an `Arc`) so every request reuses
/// the same HTTP client. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct Searcher<A, I> {
    apps: A,
    icons: I,
    config: SearchConfig,
}

/// The searcher wired to the public upstream APIs.
pub type DefaultSearcher = Searcher<ITunesCatalog, IconifyCatalog>;

impl DefaultSearcher {
    /// Validate `config` and build HTTP catalogs from it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid or
    /// the HTTP client cannot be built.
    pub fn from_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let apps = ITunesCatalog::new(&config)?;
        let icons = IconifyCatalog::new(&config)?;
        Ok(Self {
            apps,
            icons,
            config,
        })
    }
}

impl<A: AppCatalog, I: IconCatalog> Searcher<A, I> {
    /// Bind arbitrary catalogs, e.g. in-memory ones for tests.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub fn with_catalogs(apps: A, icons: I, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            apps,
            icons,
            config,
        })
    }

    /// The configuration this searcher was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Single-term application search. See [`search_apps`].
    pub async fn search_apps(&self, request: &AppSearchRequest) -> Result<AppSearchResponse> {
        orchestrate_app_search(&self.apps, request).await
    }

    /// Batch application search. See [`batch_apps`].
    pub async fn batch_apps(&self, request: &BatchAppsRequest) -> Result<BatchAppsResponse> {
        orchestrate_batch(&self.apps, request, &self.config).await
    }

    /// Paginated icon search. See [`search_icons`].
    pub async fn search_icons(&self, request: &IconSearchRequest) -> Result<IconSearchResponse> {
        orchestrate_icons(&self.icons, request, &self.config).await
    }
}

/// Search the application directory for one term.
///
/// # Errors
///
/// Returns [`SearchError::InvalidRequest`] for a blank term,
/// [`SearchError::Config`] for an invalid `config`, or
/// [`SearchError::Upstream`] if the upstream call fails.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> hunter_search::Result<()> {
/// let config = hunter_search::SearchConfig::default();
/// let request = hunter_search::AppSearchRequest::new("weather");
/// let resp = hunter_search::search_apps(&request, &config).await?;
/// for app in &resp.results {
///     println!("{}: {}", app.track_name, app.artwork_url512);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_apps(
    request: &AppSearchRequest,
    config: &SearchConfig,
) -> Result<AppSearchResponse> {
    config.validate()?;
    let catalog = ITunesCatalog::new(config)?;
    orchestrate_app_search(&catalog, request).await
}

/// Search the application directory across a category or a page of
/// popular terms, merged and ranked by popularity.
///
/// Individual term failures are logged but never fail the call; if every
/// term fails the response is empty.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid `config`.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> hunter_search::Result<()> {
/// let config = hunter_search::SearchConfig::default();
/// let resp = hunter_search::batch_apps(&hunter_search::BatchAppsRequest::new(), &config).await?;
/// println!("{} of {} apps, more: {}", resp.result_count, resp.total_found, resp.has_more);
/// # Ok(())
/// # }
/// ```
pub async fn batch_apps(
    request: &BatchAppsRequest,
    config: &SearchConfig,
) -> Result<BatchAppsResponse> {
    config.validate()?;
    let catalog = ITunesCatalog::new(config)?;
    orchestrate_batch(&catalog, request, config).await
}

/// Search the icon directory with `{offset, limit}` pagination.
///
/// # Errors
///
/// Returns [`SearchError::InvalidRequest`] for a blank term,
/// [`SearchError::Config`] for an invalid `config`, or
/// [`SearchError::AllUpstreamsFailed`] when the upstream fails and the
/// embedded fallback has no match.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> hunter_search::Result<()> {
/// let config = hunter_search::SearchConfig::default();
/// let resp = hunter_search::search_icons(&hunter_search::IconSearchRequest::new("home"), &config).await?;
/// for icon in &resp.results {
///     println!("{} ({})", icon.name, icon.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_icons(
    request: &IconSearchRequest,
    config: &SearchConfig,
) -> Result<IconSearchResponse> {
    config.validate()?;
    let catalog = IconifyCatalog::new(config)?;
    orchestrate_icons(&catalog, request, config).await
}
