//! iTunes Search API application catalog.
//!
//! Queries `GET <endpoint>?term=&media=software&entity=software&limit=&country=[&offset=]`
//! and maps the `results[]` array onto [`AppItem`] values, filling in
//! defaults for the optional numeric fields.

use serde::Deserialize;
use url::Url;

use crate::catalog::{AppCatalog, AppPage, AppQuery};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::{AppItem, UNKNOWN_VERSION};

/// Application catalog backed by the iTunes Search API.
#[derive(Debug, Clone)]
pub struct ITunesCatalog {
    client: reqwest::Client,
    endpoint: String,
}

impl ITunesCatalog {
    /// Build a catalog using the endpoint and HTTP settings from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_client(config)?,
            endpoint: config.app_store_endpoint.clone(),
        })
    }

    fn request_url(&self, query: &AppQuery) -> Result<Url, SearchError> {
        let limit = query.limit.to_string();
        let mut params = vec![
            ("term", query.term.as_str()),
            ("media", "software"),
            ("entity", "software"),
            ("limit", limit.as_str()),
            ("country", query.country.as_str()),
        ];
        let offset = query.offset.map(|o| o.to_string());
        if let Some(ref offset) = offset {
            params.push(("offset", offset.as_str()));
        }
        Url::parse_with_params(&self.endpoint, &params)
            .map_err(|e| SearchError::Config(format!("invalid app_store_endpoint: {e}")))
    }
}

impl AppCatalog for ITunesCatalog {
    async fn search_apps(&self, query: &AppQuery) -> Result<AppPage, SearchError> {
        tracing::trace!(term = %query.term, limit = query.limit, "app catalog search");

        let url = self.request_url(query)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Upstream(format!("app search request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Upstream(format!("app search HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Upstream(format!("app search response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "app catalog response received");

        parse_app_payload(&body)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAppResponse {
    #[serde(default)]
    result_count: Option<usize>,
    #[serde(default)]
    results: Vec<RawApp>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawApp {
    track_id: Option<u64>,
    #[serde(default)]
    track_name: Option<String>,
    #[serde(default)]
    artist_name: Option<String>,
    #[serde(default)]
    bundle_id: Option<String>,
    #[serde(default)]
    artwork_url60: Option<String>,
    #[serde(default)]
    artwork_url100: Option<String>,
    #[serde(default)]
    artwork_url512: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    primary_genre_name: Option<String>,
    #[serde(default)]
    average_user_rating: Option<f64>,
    #[serde(default)]
    user_rating_count: Option<u64>,
    #[serde(default)]
    track_view_url: Option<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    file_size_bytes: Option<NumberOrText>,
    #[serde(default)]
    version: Option<String>,
}

/// The store reports byte sizes as strings; accept either form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

impl NumberOrText {
    fn as_u64(&self) -> u64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

impl RawApp {
    fn into_item(self) -> Option<AppItem> {
        let track_id = self.track_id?;
        Some(AppItem {
            track_id,
            track_name: self.track_name.unwrap_or_default(),
            artist_name: self.artist_name.unwrap_or_default(),
            bundle_id: self.bundle_id.unwrap_or_default(),
            artwork_url60: self.artwork_url60.unwrap_or_default(),
            artwork_url100: self.artwork_url100.unwrap_or_default(),
            artwork_url512: self.artwork_url512.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            primary_genre_name: self.primary_genre_name.unwrap_or_default(),
            average_user_rating: self
                .average_user_rating
                .filter(|r| r.is_finite())
                .unwrap_or(0.0)
                .clamp(0.0, 5.0),
            user_rating_count: self.user_rating_count.unwrap_or(0),
            track_view_url: self.track_view_url.unwrap_or_default(),
            currency: self.currency.unwrap_or_default(),
            price: self.price.unwrap_or(0.0),
            file_size_bytes: self.file_size_bytes.as_ref().map_or(0, NumberOrText::as_u64),
            version: self
                .version
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_VERSION.to_owned()),
            search_term: None,
        })
    }
}

/// Parse an application search response body.
///
/// Results without a `trackId` have no identity and are skipped.
/// `resultCount` falls back to the number of parsed results.
///
/// # Errors
///
/// Returns [`SearchError::Upstream`] if the body is not the expected JSON shape.
pub fn parse_app_payload(body: &str) -> Result<AppPage, SearchError> {
    let raw: RawAppResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Upstream(format!("malformed app search payload: {e}")))?;

    let items: Vec<AppItem> = raw.results.into_iter().filter_map(RawApp::into_item).collect();
    let result_count = raw.result_count.unwrap_or(items.len());

    Ok(AppPage {
        items,
        result_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "resultCount": 2,
        "results": [
            {
                "trackId": 389801252,
                "trackName": "Instagram",
                "artistName": "Instagram, Inc.",
                "bundleId": "com.burbn.instagram",
                "artworkUrl60": "https://is1.example/60x60bb.jpg",
                "artworkUrl100": "https://is1.example/100x100bb.jpg",
                "artworkUrl512": "https://is1.example/512x512bb.jpg",
                "description": "Share photos",
                "primaryGenreName": "Photo & Video",
                "averageUserRating": 4.7,
                "userRatingCount": 27000000,
                "trackViewUrl": "https://apps.apple.com/us/app/instagram/id389801252",
                "currency": "USD",
                "price": 0.0,
                "fileSizeBytes": "367651840",
                "version": "312.0"
            },
            {
                "trackId": 42,
                "trackName": "Bare"
            }
        ]
    }"#;

    #[test]
    fn parses_full_record() {
        let page = parse_app_payload(SAMPLE).expect("parse");
        assert_eq!(page.result_count, 2);
        let app = &page.items[0];
        assert_eq!(app.track_id, 389801252);
        assert_eq!(app.bundle_id, "com.burbn.instagram");
        assert_eq!(app.user_rating_count, 27_000_000);
        assert_eq!(app.file_size_bytes, 367_651_840);
        assert_eq!(app.version, "312.0");
        assert!((app.average_user_rating - 4.7).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_optional_fields_default() {
        let page = parse_app_payload(SAMPLE).expect("parse");
        let bare = &page.items[1];
        assert_eq!(bare.average_user_rating, 0.0);
        assert_eq!(bare.user_rating_count, 0);
        assert_eq!(bare.price, 0.0);
        assert_eq!(bare.file_size_bytes, 0);
        assert_eq!(bare.version, UNKNOWN_VERSION);
        assert!(bare.artist_name.is_empty());
    }

    #[test]
    fn numeric_file_size_accepted() {
        let page =
            parse_app_payload(r#"{"results":[{"trackId":1,"fileSizeBytes":1024}]}"#).expect("parse");
        assert_eq!(page.items[0].file_size_bytes, 1024);
    }

    #[test]
    fn result_without_track_id_skipped() {
        let page = parse_app_payload(r#"{"resultCount":2,"results":[{"trackName":"x"},{"trackId":5}]}"#)
            .expect("parse");
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].track_id, 5);
        assert_eq!(page.result_count, 2);
    }

    #[test]
    fn missing_result_count_uses_item_count() {
        let page = parse_app_payload(r#"{"results":[{"trackId":1},{"trackId":2}]}"#).expect("parse");
        assert_eq!(page.result_count, 2);
    }

    #[test]
    fn out_of_range_rating_clamped() {
        let page = parse_app_payload(r#"{"results":[{"trackId":1,"averageUserRating":7.5}]}"#)
            .expect("parse");
        assert_eq!(page.items[0].average_user_rating, 5.0);
    }

    #[test]
    fn malformed_body_is_upstream_error() {
        let err = parse_app_payload("<html>oops</html>").unwrap_err();
        assert!(matches!(err, SearchError::Upstream(_)));
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn request_url_carries_all_params() {
        let catalog = ITunesCatalog::new(&SearchConfig::default()).expect("catalog");
        let url = catalog
            .request_url(&AppQuery {
                term: "photo & video".into(),
                country: "GB".into(),
                limit: 50,
                offset: Some(25),
            })
            .expect("url");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("term".into(), "photo & video".into())));
        assert!(pairs.contains(&("media".into(), "software".into())));
        assert!(pairs.contains(&("entity".into(), "software".into())));
        assert!(pairs.contains(&("limit".into(), "50".into())));
        assert!(pairs.contains(&("country".into(), "GB".into())));
        assert!(pairs.contains(&("offset".into(), "25".into())));
    }

    #[test]
    fn request_url_omits_unset_offset() {
        let catalog = ITunesCatalog::new(&SearchConfig::default()).expect("catalog");
        let url = catalog
            .request_url(&AppQuery {
                term: "zoom".into(),
                country: "US".into(),
                limit: 50,
                offset: None,
            })
            .expect("url");
        assert!(!url.query_pairs().any(|(k, _)| k == "offset"));
    }
}
