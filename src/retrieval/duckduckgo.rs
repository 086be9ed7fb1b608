//! DuckDuckGo Instant Answer API client (secondary source).

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::debug;

use super::error::{RetrievalError, RetrievalResult};
use super::source::SecondarySource;
use super::types::{Passage, WebAnswer};

const ORIGIN: &str = "duckduckgo";

#[derive(Debug, Default, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "Abstract", default)]
    abstract_text: String,
    #[serde(rename = "AbstractURL", default)]
    abstract_url: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

// Topic groups carry `Name`/`Topics` instead of `Text`/`FirstURL`; both
// fields stay `None` for them and they are skipped.
#[derive(Debug, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "Text", default)]
    text: Option<String>,
    #[serde(rename = "FirstURL", default)]
    first_url: Option<String>,
}

impl From<InstantAnswer> for WebAnswer {
    fn from(answer: InstantAnswer) -> Self {
        let related = answer
            .related_topics
            .into_iter()
            .filter_map(|topic| match (topic.text, topic.first_url) {
                (Some(text), url) if !text.is_empty() => {
                    Some(Passage::new(text, url.unwrap_or_default()))
                }
                _ => None,
            })
            .collect();

        WebAnswer {
            abstract_passage: Passage::new(answer.abstract_text, answer.abstract_url),
            related,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DuckDuckGoClient {
    http: HttpClient,
    base_url: String,
}

impl DuckDuckGoClient {
    /// Builds a client against `base_url` (e.g. `https://api.duckduckgo.com`).
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

    pub fn with_client(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl SecondarySource for DuckDuckGoClient {
    fn name(&self) -> &'static str {
        ORIGIN
    }

    async fn lookup(&self, query: &str) -> RetrievalResult<WebAnswer> {
        let url = format!("{}/", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                origin: ORIGIN,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let answer = parse_answer(&body)?;
        debug!(
            source = ORIGIN,
            %query,
            has_abstract = !answer.abstract_passage.text.is_empty(),
            related = answer.related.len(),
            "lookup complete"
        );
        Ok(answer)
    }
}

pub(crate) fn parse_answer(body: &str) -> RetrievalResult<WebAnswer> {
    // An empty body carries no answer.
    if body.trim().is_empty() {
        return Ok(WebAnswer::default());
    }
    serde_json::from_str::<InstantAnswer>(body)
        .map(WebAnswer::from)
        .map_err(|e| RetrievalError::Parse {
            origin: ORIGIN,
            reason: e.to_string(),
        })
}
