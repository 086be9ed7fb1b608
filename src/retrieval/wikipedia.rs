//! MediaWiki action API client (primary source).

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{RetrievalError, RetrievalResult};
use super::source::PrimarySource;
use super::types::Passage;

const ORIGIN: &str = "wikipedia";
const API_PATH: &str = "/w/api.php";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: HashMap<String, ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    #[serde(default)]
    extract: Option<String>,
}

/// Client for `list=search` and `prop=extracts` on a MediaWiki host.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: HttpClient,
    base_url: String,
}

impl WikipediaClient {
    /// Builds a client against `base_url` (e.g. `https://en.wikipedia.org`).
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> RetrievalResult<Self> {
        let http = HttpClient::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Reuses an existing HTTP client (connection pool shared with other sources).
    pub fn with_client(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public article URL for a title.
    pub fn page_url(&self, title: &str) -> String {
        format!("{}/wiki/{}", self.base_url, title.replace(' ', "_"))
    }

    async fn get_body(&self, params: &[(&str, &str)]) -> RetrievalResult<String> {
        let url = format!("{}{}", self.base_url, API_PATH);
        let response = self.http.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                origin: ORIGIN,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

impl PrimarySource for WikipediaClient {
    fn name(&self) -> &'static str {
        ORIGIN
    }

    async fn search(&self, query: &str, limit: usize) -> RetrievalResult<Vec<String>> {
        let limit = limit.to_string();
        let body = self
            .get_body(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", &limit),
                ("format", "json"),
            ])
            .await?;

        let titles = parse_search_titles(&body)?;
        debug!(source = ORIGIN, %query, hits = titles.len(), "search complete");
        Ok(titles)
    }

    async fn fetch_extract(&self, title: &str) -> RetrievalResult<Option<Passage>> {
        let body = self
            .get_body(&[
                ("action", "query"),
                ("titles", title),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("format", "json"),
            ])
            .await?;

        Ok(parse_extract(&body)?.map(|text| Passage::new(text, self.page_url(title))))
    }
}

fn search_titles(response: SearchResponse) -> Vec<String> {
    response
        .query
        .map(|q| q.search)
        .unwrap_or_default()
        .into_iter()
        .map(|hit| hit.title)
        .filter(|title| !title.is_empty())
        .collect()
}

fn first_extract(response: ExtractResponse) -> Option<String> {
    response
        .query?
        .pages
        .into_values()
        .filter_map(|page| page.extract)
        .find(|extract| !extract.trim().is_empty())
}

fn parse_json<T: DeserializeOwned>(body: &str) -> RetrievalResult<T> {
    serde_json::from_str(body).map_err(|e| RetrievalError::Parse {
        origin: ORIGIN,
        reason: e.to_string(),
    })
}

pub(crate) fn parse_search_titles(body: &str) -> RetrievalResult<Vec<String>> {
    parse_json(body).map(search_titles)
}

pub(crate) fn parse_extract(body: &str) -> RetrievalResult<Option<String>> {
    parse_json(body).map(first_extract)
}
