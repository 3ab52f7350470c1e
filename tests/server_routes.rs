//! End-to-end route tests: a served router backed by `wiremock` upstreams.

use hunter_search::{DefaultSearcher, SearchConfig};
use icon_hunter::router;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve(upstream: &MockServer) -> String {
    let config = SearchConfig {
        app_store_endpoint: format!("{}/search", upstream.uri()),
        icon_endpoint: upstream.uri(),
        icon_asset_base: "https://assets.test".into(),
        timeout_seconds: 5,
        ..Default::default()
    };
    let searcher = DefaultSearcher::from_config(config).expect("searcher");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router(searcher)).await;
    });
    format!("http://{addr}")
}

async fn get_json(url: &str) -> (u16, Value) {
    let resp = reqwest::get(url).await.expect("request");
    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.expect("json body");
    (status, body)
}

#[tokio::test]
async fn health_reports_ok() {
    let upstream = MockServer::start().await;
    let base = serve(&upstream).await;
    let (status, body) = get_json(&format!("{base}/health")).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn search_apps_returns_camel_case_envelope() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("term", "notes"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultCount": 1,
            "results": [{"trackId": 9, "trackName": "Notes", "averageUserRating": 4.2}]
        })))
        .expect(1)
        .mount(&upstream)
        .await;
    let base = serve(&upstream).await;

    let (status, body) =
        get_json(&format!("{base}/api/search-apps?term=notes&limit=5&offset=20")).await;
    assert_eq!(status, 200);
    assert_eq!(body["resultCount"], 1);
    assert_eq!(body["searchTerm"], "notes");
    assert_eq!(body["offset"], 20);
    assert_eq!(body["results"][0]["trackName"], "Notes");
    assert_eq!(body["results"][0]["version"], "unknown");
}

#[tokio::test]
async fn search_apps_missing_term_is_400() {
    let upstream = MockServer::start().await;
    let base = serve(&upstream).await;
    let (status, body) = get_json(&format!("{base}/api/search-apps")).await;
    assert_eq!(status, 400);
    assert!(body["error"].is_string());
    assert!(upstream.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn search_apps_upstream_failure_is_generic_500() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&upstream)
        .await;
    let base = serve(&upstream).await;

    let (status, body) = get_json(&format!("{base}/api/search-apps?term=notes")).await;
    assert_eq!(status, 500);
    let message = body["error"].as_str().expect("error message");
    assert!(!message.contains("127.0.0.1"));
    assert!(!message.contains("503"));
}

#[tokio::test]
async fn batch_apps_category_query() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("term", "games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultCount": 2,
            "results": [
                {"trackId": 1, "trackName": "Low", "averageUserRating": 3.0, "userRatingCount": 5},
                {"trackId": 2, "trackName": "High", "averageUserRating": 4.8, "userRatingCount": 50000}
            ]
        })))
        .expect(1)
        .mount(&upstream)
        .await;
    let base = serve(&upstream).await;

    let (status, body) = get_json(&format!("{base}/api/batch-apps?category=games&limit=1")).await;
    assert_eq!(status, 200);
    assert_eq!(body["category"], "games");
    assert_eq!(body["resultCount"], 1);
    assert_eq!(body["totalFound"], 2);
    assert_eq!(body["results"][0]["trackName"], "High");
    assert_eq!(body["results"][0]["searchTerm"], "games");
    assert_eq!(body["searchTerms"], json!(["games"]));
}

#[tokio::test]
async fn batch_apps_past_end_is_empty_page() {
    let upstream = MockServer::start().await;
    let base = serve(&upstream).await;

    let (status, body) = get_json(&format!("{base}/api/batch-apps?startIndex=100")).await;
    assert_eq!(status, 200);
    assert_eq!(body["resultCount"], 0);
    assert_eq!(body["hasMore"], false);
    assert_eq!(body["startIndex"], 100);
}

#[tokio::test]
async fn batch_listing_actions() {
    let upstream = MockServer::start().await;
    let base = serve(&upstream).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/batch-apps"))
        .json(&json!({"action": "getCategories"}))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body["categories"][0], "games");

    let resp = client
        .post(format!("{base}/api/batch-apps"))
        .json(&json!({"action": "explode"}))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn search_svg_paginates_over_fetch() {
    let upstream = MockServer::start().await;
    let icons: Vec<String> = (0..12).map(|i| format!("tabler:star-{i}")).collect();
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "star"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "icons": icons,
            "total": 12
        })))
        .expect(1)
        .mount(&upstream)
        .await;
    let base = serve(&upstream).await;

    let (status, body) = get_json(&format!("{base}/api/search-svg?term=star&limit=5")).await;
    assert_eq!(status, 200);
    assert_eq!(body["resultCount"], 5);
    assert_eq!(body["hasMore"], true);
    assert_eq!(body["total"], 12);
    assert_eq!(body["results"][0]["id"], "tabler:star-0");
    assert_eq!(body["results"][0]["downloadUrl"], "https://assets.test/tabler:star-0.svg");
}

#[tokio::test]
async fn search_svg_failure_serves_fallback() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;
    let base = serve(&upstream).await;

    let (status, body) = get_json(&format!("{base}/api/search-svg?term=heart")).await;
    assert_eq!(status, 200);
    assert_eq!(body["results"][0]["id"], "mdi:heart");
    assert_eq!(body["hasMore"], false);
}

#[tokio::test]
async fn malformed_query_is_400_json() {
    let upstream = MockServer::start().await;
    let base = serve(&upstream).await;
    let (status, body) = get_json(&format!("{base}/api/search-svg?term=x&limit=lots")).await;
    assert_eq!(status, 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn batch_apps_blank_category_reports_mixed() {
    let upstream = MockServer::start().await;
    let base = serve(&upstream).await;

    let (status, body) = get_json(&format!("{base}/api/batch-apps?category=")).await;
    assert_eq!(status, 200);
    assert_eq!(body["category"], "mixed");
    assert_eq!(body["searchTerms"].as_array().map(Vec::len), Some(10));
}
