//! HTTP clients against an in-process fake of the public APIs.

mod common;

use std::time::Duration;

use plagcheck::retrieval::{
    CandidateRetriever, DuckDuckGoClient, PrimarySource, Provenance, RetrievalError,
    RetrieverConfig, SecondarySource, WikipediaClient,
};

use common::{FakeWeb, spawn_fake_web};

const UA: &str = "plagcheck-tests/0.1";
const TIMEOUT: Duration = Duration::from_secs(5);

const REEF: &str = "The Great Barrier Reef is the world's largest coral reef system, composed of \
over 2,900 individual reefs and 900 islands stretching for over 2,300 kilometres.";
const VOLCANO: &str = "A volcano is a rupture in the crust of a planetary-mass object that allows \
hot lava, volcanic ash and gases to escape from a magma chamber below the surface.";

fn wikipedia(base_url: &str) -> WikipediaClient {
    WikipediaClient::new(base_url, UA, TIMEOUT).expect("Failed to build client")
}

fn duckduckgo(base_url: &str) -> DuckDuckGoClient {
    DuckDuckGoClient::new(base_url, UA, TIMEOUT).expect("Failed to build client")
}

#[tokio::test]
async fn test_wikipedia_search_respects_limit() {
    let server = spawn_fake_web(
        FakeWeb::new()
            .with_article("Great Barrier Reef", REEF)
            .with_article("Volcano", VOLCANO)
            .with_article("Coral", "Short."),
    )
    .await;
    let client = wikipedia(&server.base_url);

    let titles = client.search("coral reef islands", 2).await.unwrap();

    assert_eq!(titles, vec!["Great Barrier Reef", "Volcano"]);
    assert_eq!(server.searches(), vec!["coral reef islands"]);
}

#[tokio::test]
async fn test_wikipedia_fetch_extract_builds_article_url() {
    let server = spawn_fake_web(FakeWeb::new().with_article("Great Barrier Reef", REEF)).await;
    let client = wikipedia(&server.base_url);

    let passage = client
        .fetch_extract("Great Barrier Reef")
        .await
        .unwrap()
        .expect("Extract should exist");

    assert_eq!(passage.text, REEF);
    assert_eq!(
        passage.locator,
        format!("{}/wiki/Great_Barrier_Reef", server.base_url)
    );
}

#[tokio::test]
async fn test_wikipedia_missing_page_has_no_extract() {
    let server = spawn_fake_web(FakeWeb::new()).await;
    let client = wikipedia(&server.base_url);

    assert_eq!(client.fetch_extract("Atlantis").await.unwrap(), None);
}

#[tokio::test]
async fn test_wikipedia_error_status() {
    let server = spawn_fake_web(FakeWeb::new().with_wiki_status(503)).await;
    let client = wikipedia(&server.base_url);

    let err = client.search("anything at all", 3).await.unwrap_err();
    assert!(matches!(
        err,
        RetrievalError::Status {
            origin: "wikipedia",
            status: 503
        }
    ));
}

#[tokio::test]
async fn test_wikipedia_malformed_body() {
    let server = spawn_fake_web(FakeWeb::new().with_wiki_raw("<html>maintenance</html>")).await;
    let client = wikipedia(&server.base_url);

    let err = client.search("anything at all", 3).await.unwrap_err();
    assert!(matches!(err, RetrievalError::Parse { origin: "wikipedia", .. }));

    let err = client.fetch_extract("Great Barrier Reef").await.unwrap_err();
    assert!(matches!(err, RetrievalError::Parse { origin: "wikipedia", .. }));
}

#[tokio::test]
async fn test_duckduckgo_lookup_parses_abstract_and_related() {
    let server = spawn_fake_web(FakeWeb::new().with_ddg_body(serde_json::json!({
        "Abstract": REEF,
        "AbstractURL": "https://example.org/reef",
        "RelatedTopics": [
            { "Text": VOLCANO, "FirstURL": "https://example.org/volcano" },
            { "Name": "See also", "Topics": [{ "Text": "nested", "FirstURL": "https://x" }] }
        ]
    })))
    .await;
    let client = duckduckgo(&server.base_url);

    let answer = client.lookup("great barrier reef").await.unwrap();

    assert_eq!(answer.abstract_passage.text, REEF);
    assert_eq!(answer.abstract_passage.locator, "https://example.org/reef");
    assert_eq!(answer.related.len(), 1);
    assert_eq!(answer.related[0].locator, "https://example.org/volcano");
    assert_eq!(server.ddg_hits(), 1);
}

#[tokio::test]
async fn test_duckduckgo_empty_body_is_empty_answer() {
    let server = spawn_fake_web(FakeWeb::new().with_ddg_raw("")).await;
    let client = duckduckgo(&server.base_url);

    let answer = client.lookup("nothing here").await.unwrap();
    assert!(answer.abstract_passage.text.is_empty());
    assert!(answer.related.is_empty());
}

#[tokio::test]
async fn test_duckduckgo_error_status() {
    let server = spawn_fake_web(FakeWeb::new().with_ddg_status(500)).await;
    let client = duckduckgo(&server.base_url);

    let err = client.lookup("anything").await.unwrap_err();
    assert!(matches!(
        err,
        RetrievalError::Status {
            origin: "duckduckgo",
            status: 500
        }
    ));
}

#[tokio::test]
async fn test_retriever_over_http_sources() {
    let server = spawn_fake_web(
        FakeWeb::new()
            .with_article("Great Barrier Reef", REEF)
            .with_ddg_body(serde_json::json!({
                "Abstract": VOLCANO,
                "AbstractURL": "https://example.org/volcano",
                "RelatedTopics": []
            })),
    )
    .await;

    let retriever = CandidateRetriever::new(
        wikipedia(&server.base_url),
        duckduckgo(&server.base_url),
        RetrieverConfig::default().with_min_call_interval(Duration::from_millis(10)),
    );

    let candidates = retriever
        .try_primary("largest coral reef system")
        .await
        .unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].provenance, Provenance::Primary);

    let candidates = retriever.try_secondary("volcano").await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].provenance, Provenance::Secondary);
    assert_eq!(candidates[0].locator, "https://example.org/volcano");
}

#[tokio::test]
async fn test_retriever_times_out_slow_source() {
    let server = spawn_fake_web(
        FakeWeb::new()
            .with_article("Great Barrier Reef", REEF)
            .with_delay(Duration::from_millis(500)),
    )
    .await;

    let retriever = CandidateRetriever::new(
        wikipedia(&server.base_url),
        duckduckgo(&server.base_url),
        RetrieverConfig::default()
            .with_min_call_interval(Duration::ZERO)
            .with_request_timeout(Duration::from_millis(50)),
    );

    let err = retriever.try_primary("coral reef").await.unwrap_err();
    assert!(matches!(
        err,
        RetrievalError::Timeout {
            origin: "wikipedia",
            timeout_ms: 50
        }
    ));
}
