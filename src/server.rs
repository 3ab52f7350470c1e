//! HTTP surface: thin axum routes over the search core.
//!
//! Handlers parse query strings into core request structs, call the shared
//! [`DefaultSearcher`], and map [`SearchError`] onto status codes. Client
//! errors return 400 with their message; everything else returns 500 with
//! a generic message so upstream details never reach response bodies.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use hunter_search::planner::{categories, popular_terms};
use hunter_search::{
    AppSearchRequest, BatchAppsRequest, DefaultSearcher, IconSearchRequest, SearchError,
};
use serde::Deserialize;

use crate::config::HunterConfig;
use crate::error::{HunterError, Result};

type SharedSearcher = Arc<DefaultSearcher>;

#[derive(Deserialize)]
struct ListingBody {
    #[serde(default)]
    action: String,
}

/// Build the router around an existing searcher.
pub fn router(searcher: DefaultSearcher) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/search-apps", get(search_apps))
        .route("/api/batch-apps", get(batch_apps).post(batch_listing))
        .route("/api/search-svg", get(search_icons))
        .with_state(Arc::new(searcher))
}

/// Bind the configured address and serve until the process exits.
///
/// # Errors
///
/// Returns an error if the search settings are invalid or the listener
/// cannot be bound.
pub async fn run_server(config: HunterConfig) -> Result<()> {
    let searcher = DefaultSearcher::from_config(config.search)?;
    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HunterError::Server(format!("failed to bind {addr}: {e}")))?;
    let local_addr = listener.local_addr()?;

    tracing::info!("icon hunter listening on http://{local_addr}");
    axum::serve(listener, router(searcher))
        .await
        .map_err(|e| HunterError::Server(e.to_string()))?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

async fn search_apps(
    State(searcher): State<SharedSearcher>,
    query: std::result::Result<Query<AppSearchRequest>, QueryRejection>,
) -> Response {
    let Query(request) = match query {
        Ok(q) => q,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match searcher.search_apps(&request).await {
        Ok(resp) => Json(resp).into_response(),
        Err(err) => error_response("search-apps", &err),
    }
}

async fn batch_apps(
    State(searcher): State<SharedSearcher>,
    query: std::result::Result<Query<BatchAppsRequest>, QueryRejection>,
) -> Response {
    let Query(request) = match query {
        Ok(q) => q,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match searcher.batch_apps(&request).await {
        Ok(resp) => Json(resp).into_response(),
        Err(err) => error_response("batch-apps", &err),
    }
}

async fn batch_listing(body: std::result::Result<Json<ListingBody>, JsonRejection>) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match body.action.as_str() {
        "getCategories" => Json(serde_json::json!({
            "categories": categories(),
            "message": "categories listed",
        }))
        .into_response(),
        "getPopularTerms" => Json(serde_json::json!({
            "terms": popular_terms(),
            "message": "popular terms listed",
        }))
        .into_response(),
        other => error_response(
            "batch-apps",
            &SearchError::InvalidRequest(format!("unknown action: {other:?}")),
        ),
    }
}

async fn search_icons(
    State(searcher): State<SharedSearcher>,
    query: std::result::Result<Query<IconSearchRequest>, QueryRejection>,
) -> Response {
    let Query(request) = match query {
        Ok(q) => q,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match searcher.search_icons(&request).await {
        Ok(resp) => Json(resp).into_response(),
        Err(err) => error_response("search-svg", &err),
    }
}

fn rejection_response(detail: String) -> Response {
    error_response("request", &SearchError::InvalidRequest(detail))
}

fn error_response(route: &str, err: &SearchError) -> Response {
    let status = if err.is_client_error() {
        tracing::debug!(route, error = %err, "rejected request");
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!(route, error = %err, "request failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(serde_json::json!({"error": err.public_message()})),
    )
        .into_response()
}
