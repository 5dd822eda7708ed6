//! OMDb metadata provider.
//!
//! Both endpoints are plain GETs against the same base URL: `s=` for title
//! search and `i=` for identifier lookup. The API answers HTTP 200 for most
//! failures and signals them with `"Response": "False"` plus an `Error`
//! message, so the body is parsed before the status is considered.

use async_trait::async_trait;
use cinelist_core::config::PlotMode;
use cinelist_core::{CinelistConfig, CinelistError, DetailRecord, MediaId, Poster, SummaryRecord};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::MetadataProvider;
use crate::errors::{DetailError, SearchError};
use crate::query::SearchQuery;

/// Value the API uses for fields it has no data for.
const NOT_AVAILABLE: &str = "N/A";

/// Metadata provider backed by the OMDb HTTP API.
#[derive(Debug, Clone)]
pub struct OmdbProvider {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    plot_mode: PlotMode,
}

/// Envelope shared by both endpoints.
#[derive(Debug, Deserialize)]
struct OmdbStatus {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl OmdbStatus {
    fn is_success(&self) -> Option<bool> {
        match self.response.as_deref() {
            Some(flag) if flag.eq_ignore_ascii_case("true") => Some(true),
            Some(flag) if flag.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(flatten)]
    status: OmdbStatus,
    #[serde(rename = "Search")]
    search: Option<Vec<OmdbSearchItem>>,
}

#[derive(Debug, Deserialize)]
struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Type", default)]
    media_type: String,
    #[serde(rename = "Poster", default)]
    poster: String,
}

#[derive(Debug, Deserialize)]
struct OmdbTitleResponse {
    #[serde(flatten)]
    status: OmdbStatus,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
}

impl From<OmdbSearchItem> for SummaryRecord {
    fn from(item: OmdbSearchItem) -> Self {
        SummaryRecord {
            id: MediaId::new(item.imdb_id),
            title: item.title,
            year: item.year,
            media_type: item.media_type,
            poster: Poster::from_api(&item.poster),
        }
    }
}

impl OmdbProvider {
    /// Creates a provider from session configuration.
    ///
    /// # Errors
    ///
    /// - `CinelistError::Configuration` - Invalid base URL or HTTP client could not be built
    pub fn from_config(config: &CinelistConfig) -> cinelist_core::Result<Self> {
        let base_url = config.base_url()?;

        let mut builder = reqwest::Client::builder().user_agent(config.api.user_agent);
        if let Some(timeout) = config.api.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| CinelistError::Configuration {
            reason: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api.api_key.clone(),
            plot_mode: config.api.plot_mode,
        })
    }

    /// Builds a request URL carrying the access key and `params`.
    fn endpoint(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(ref api_key) = self.api_key {
                pairs.append_pair("apikey", api_key);
            }
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }
        url
    }

    /// Sends a GET and returns the status code and body text.
    async fn fetch_body(&self, url: Url) -> Result<(reqwest::StatusCode, String), reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl MetadataProvider for OmdbProvider {
    async fn search_titles(&self, query: &SearchQuery) -> Result<Vec<SummaryRecord>, SearchError> {
        let url = self.endpoint(&[("s", query.as_str())]);
        debug!(query = %query, "Searching titles");

        let (status, body) = self
            .fetch_body(url)
            .await
            .map_err(|e| SearchError::Network {
                reason: format!("HTTP request failed: {e}"),
            })?;

        let parsed: OmdbSearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Network {
                reason: format!("JSON parsing failed (HTTP {status}): {e}"),
            })?;

        match parsed.status.is_success() {
            Some(true) => parsed
                .search
                .map(|items| items.into_iter().map(SummaryRecord::from).collect())
                .ok_or_else(|| SearchError::Network {
                    reason: "successful response without a Search list".to_string(),
                }),
            Some(false) => Err(SearchError::NotFound {
                message: parsed
                    .status
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string()),
            }),
            None => {
                warn!(%status, "Search response without a Response flag");
                Err(SearchError::Network {
                    reason: format!("response without a Response flag (HTTP {status})"),
                })
            }
        }
    }

    async fn lookup_title(&self, id: &MediaId) -> Result<DetailRecord, DetailError> {
        let url = self.endpoint(&[("i", id.as_str()), ("plot", self.plot_mode.as_param())]);
        debug!(%id, "Looking up title");

        let (status, body) = self
            .fetch_body(url)
            .await
            .map_err(|e| DetailError::Network {
                reason: format!("HTTP request failed: {e}"),
            })?;

        let parsed: OmdbTitleResponse =
            serde_json::from_str(&body).map_err(|e| DetailError::Network {
                reason: format!("JSON parsing failed (HTTP {status}): {e}"),
            })?;

        match parsed.status.is_success() {
            Some(true) => {
                let or_na = |field: Option<String>| field.unwrap_or_else(|| NOT_AVAILABLE.into());
                Ok(DetailRecord {
                    id: id.clone(),
                    plot: or_na(parsed.plot),
                    rating: or_na(parsed.imdb_rating),
                    actors: or_na(parsed.actors),
                })
            }
            Some(false) => {
                debug!(%id, error = ?parsed.status.error, "Lookup reported failure");
                Err(DetailError::NotFound)
            }
            None => Err(DetailError::Network {
                reason: format!("response without a Response flag (HTTP {status})"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};

    use super::*;

    fn provider_for(server: &Server) -> OmdbProvider {
        let mut config = CinelistConfig::default();
        config.api.base_url = server.url();
        config.api.api_key = Some("test-key".to_string());
        OmdbProvider::from_config(&config).unwrap()
    }

    const MATRIX_SEARCH: &str = r#"{
        "Search": [
            {"Title": "The Matrix", "Year": "1999", "imdbID": "tt0133093", "Type": "movie", "Poster": "https://img.example/matrix.jpg"},
            {"Title": "The Matrix Reloaded", "Year": "2003", "imdbID": "tt0234215", "Type": "movie", "Poster": "N/A"},
            {"Title": "The Matrix Revolutions", "Year": "2003", "imdbID": "tt0242653", "Type": "movie", "Poster": "https://img.example/rev.jpg"}
        ],
        "totalResults": "3",
        "Response": "True"
    }"#;

    #[tokio::test]
    async fn test_search_sends_key_and_query_and_keeps_order() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apikey".into(), "test-key".into()),
                Matcher::UrlEncoded("s".into(), "The Matrix".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(MATRIX_SEARCH)
            .create_async()
            .await;

        let provider = provider_for(&server);
        let query = SearchQuery::parse(" The Matrix ").unwrap();
        let records = provider.search_titles(&query).await.unwrap();

        mock.assert_async().await;
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["tt0133093", "tt0234215", "tt0242653"]);
        assert_eq!(records[0].title, "The Matrix");
        assert_eq!(records[0].subtitle(), "1999 | movie");
        assert_eq!(records[1].poster, Poster::Missing);
    }

    #[tokio::test]
    async fn test_search_not_found_carries_api_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded("s".into(), "zzzzz".into()))
            .with_status(200)
            .with_body(r#"{"Response":"False","Error":"Movie not found!"}"#)
            .create_async()
            .await;

        let provider = provider_for(&server);
        let err = provider
            .search_titles(&SearchQuery::parse("zzzzz").unwrap())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SearchError::NotFound {
                message: "Movie not found!".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_key_response_is_reported_with_its_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"Response":"False","Error":"Invalid API key!"}"#)
            .create_async()
            .await;

        let provider = provider_for(&server);
        let err = provider
            .search_titles(&SearchQuery::parse("Matrix").unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Invalid API key!");
    }

    #[tokio::test]
    async fn test_malformed_body_is_network_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("<html>Internal Server Error</html>")
            .create_async()
            .await;

        let provider = provider_for(&server);
        let err = provider
            .search_titles(&SearchQuery::parse("Matrix").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Network { .. }));

        let err = provider
            .lookup_title(&MediaId::new("tt0133093"))
            .await
            .unwrap_err();
        assert!(matches!(err, DetailError::Network { .. }));
    }

    #[tokio::test]
    async fn test_success_without_search_list_is_network_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_body(r#"{"Response":"True"}"#)
            .create_async()
            .await;

        let provider = provider_for(&server);
        let err = provider
            .search_titles(&SearchQuery::parse("Matrix").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Network { .. }));
    }

    #[tokio::test]
    async fn test_lookup_sends_id_and_plot_mode() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apikey".into(), "test-key".into()),
                Matcher::UrlEncoded("i".into(), "tt0133093".into()),
                Matcher::UrlEncoded("plot".into(), "short".into()),
            ]))
            .with_body(
                r#"{"Title":"The Matrix","Plot":"A hacker learns the truth.","imdbRating":"8.7","Actors":"Keanu Reeves, Laurence Fishburne","Response":"True"}"#,
            )
            .create_async()
            .await;

        let provider = provider_for(&server);
        let details = provider
            .lookup_title(&MediaId::new("tt0133093"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(details.id, MediaId::new("tt0133093"));
        assert_eq!(details.plot, "A hacker learns the truth.");
        assert_eq!(details.rating, "8.7");
        assert_eq!(details.actors, "Keanu Reeves, Laurence Fishburne");
    }

    #[tokio::test]
    async fn test_lookup_failure_is_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_body(r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#)
            .create_async()
            .await;

        let provider = provider_for(&server);
        let err = provider
            .lookup_title(&MediaId::new("tt0000000"))
            .await
            .unwrap_err();
        assert_eq!(err, DetailError::NotFound);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let mut config = CinelistConfig::default();
        config.api.base_url = "http://127.0.0.1:1/".to_string();
        let provider = OmdbProvider::from_config(&config).unwrap();

        let err = provider
            .search_titles(&SearchQuery::parse("Matrix").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Network { .. }));
    }
}
