//! In-process stand-in for the MediaWiki and Instant Answer HTTP APIs.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use parking_lot::Mutex;
use tokio::net::TcpListener;

/// Scripted behaviour of the fake web.
#[derive(Debug, Default, Clone)]
pub struct FakeWeb {
    /// `(title, extract)`; every search lists all titles in order.
    pub articles: Vec<(String, String)>,
    /// Status returned for every `/w/api.php` call instead of a body.
    pub wiki_status: Option<u16>,
    /// Raw body returned for every `/w/api.php` call.
    pub wiki_raw: Option<String>,
    /// Instant Answer JSON (or raw text) returned for `/`.
    pub ddg_body: String,
    pub ddg_status: Option<u16>,
    /// Delay applied before every response.
    pub delay: Option<Duration>,
}

impl FakeWeb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_article(mut self, title: &str, extract: &str) -> Self {
        self.articles.push((title.to_string(), extract.to_string()));
        self
    }

    pub fn with_wiki_status(mut self, status: u16) -> Self {
        self.wiki_status = Some(status);
        self
    }

    pub fn with_wiki_raw(mut self, body: &str) -> Self {
        self.wiki_raw = Some(body.to_string());
        self
    }

    pub fn with_ddg_body(mut self, body: serde_json::Value) -> Self {
        self.ddg_body = body.to_string();
        self
    }

    pub fn with_ddg_raw(mut self, body: &str) -> Self {
        self.ddg_body = body.to_string();
        self
    }

    pub fn with_ddg_status(mut self, status: u16) -> Self {
        self.ddg_status = Some(status);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug)]
struct Shared {
    web: FakeWeb,
    wiki_hits: AtomicUsize,
    ddg_hits: AtomicUsize,
    searches: Mutex<Vec<String>>,
}

/// Handle to a running fake web server.
pub struct FakeServer {
    pub base_url: String,
    shared: Arc<Shared>,
}

impl FakeServer {
    pub fn wiki_hits(&self) -> usize {
        self.shared.wiki_hits.load(Ordering::SeqCst)
    }

    pub fn ddg_hits(&self) -> usize {
        self.shared.ddg_hits.load(Ordering::SeqCst)
    }

    /// `srsearch` values received, in arrival order.
    pub fn searches(&self) -> Vec<String> {
        self.shared.searches.lock().clone()
    }
}

/// Binds an ephemeral port and serves `web` until the test runtime ends.
pub async fn spawn_fake_web(web: FakeWeb) -> FakeServer {
    let shared = Arc::new(Shared {
        web,
        wiki_hits: AtomicUsize::new(0),
        ddg_hits: AtomicUsize::new(0),
        searches: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/w/api.php", get(wiki_api))
        .route("/", get(instant_answer))
        .with_state(Arc::clone(&shared));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake web server");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Fake web server failed");
    });

    FakeServer {
        base_url: format!("http://{addr}"),
        shared,
    }
}

async fn wiki_api(
    State(shared): State<Arc<Shared>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    shared.wiki_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(delay) = shared.web.delay {
        tokio::time::sleep(delay).await;
    }
    if let Some(status) = shared.web.wiki_status {
        return status_only(status);
    }
    if let Some(raw) = &shared.web.wiki_raw {
        return raw.clone().into_response();
    }

    if params.get("list").map(String::as_str) == Some("search") {
        let query = params.get("srsearch").cloned().unwrap_or_default();
        shared.searches.lock().push(query);

        let limit = params
            .get("srlimit")
            .and_then(|l| l.parse::<usize>().ok())
            .unwrap_or(10);
        let hits: Vec<_> = shared
            .web
            .articles
            .iter()
            .take(limit)
            .map(|(title, _)| serde_json::json!({ "ns": 0, "title": title }))
            .collect();
        return Json(serde_json::json!({ "query": { "search": hits } })).into_response();
    }

    if params.get("prop").map(String::as_str) == Some("extracts") {
        let title = params.get("titles").cloned().unwrap_or_default();
        let page = shared
            .web
            .articles
            .iter()
            .position(|(t, _)| *t == title)
            .map(|i| {
                let id = (i + 1).to_string();
                let extract = &shared.web.articles[i].1;
                (id, serde_json::json!({ "title": title, "extract": extract }))
            })
            .unwrap_or_else(|| {
                (
                    "-1".to_string(),
                    serde_json::json!({ "title": title, "missing": "" }),
                )
            });
        let mut pages = serde_json::Map::new();
        pages.insert(page.0, page.1);
        return Json(serde_json::json!({ "query": { "pages": pages } })).into_response();
    }

    status_only(400)
}

async fn instant_answer(State(shared): State<Arc<Shared>>) -> Response {
    shared.ddg_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(delay) = shared.web.delay {
        tokio::time::sleep(delay).await;
    }
    if let Some(status) = shared.web.ddg_status {
        return status_only(status);
    }
    shared.web.ddg_body.clone().into_response()
}

fn status_only(status: u16) -> Response {
    StatusCode::from_u16(status)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}
