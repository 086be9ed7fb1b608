//! Plagcheck HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use plagcheck::config::Config;
use plagcheck::embedding::{CachedEmbedder, MiniLmConfig, MiniLmEmbedder, SharedEmbedder};
use plagcheck::pipeline::Detector;
use plagcheck::retrieval::{CandidateRetriever, DuckDuckGoClient, WikipediaClient};
use plagcheck::scoring::SimilarityScorer;
use plagcheck_server::gateway::{HandlerState, create_router_with_state};
use plagcheck_server::health::{health_check_port, run_health_check};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
 ___ _              _           _
| _ \ |__ _ __ _ __| |_  ___ __| |__
|  _/ / _` / _` / _| ' \/ -_) _| / /
|_| |_\__,_\__, \__|_||_\___\__|_\_\
           |___/
        SEGMENT. RETRIEVE. COMPARE.
                                        AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check(health_check_port()).await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        threshold = config.match_threshold,
        max_sentences = config.max_sentences,
        "Plagcheck starting"
    );

    let timeout = config.request_timeout();
    let wikipedia = WikipediaClient::new(&config.wikipedia_url, &config.user_agent, timeout)?;
    let duckduckgo = DuckDuckGoClient::new(&config.duckduckgo_url, &config.user_agent, timeout)?;

    let minilm_config = MiniLmConfig::from_optional_dir(config.model_path.as_deref());
    if minilm_config.testing_stub {
        tracing::warn!(
            "No PLAGCHECK_MODEL_PATH configured, running embedder in stub mode (scores are not meaningful)"
        );
    }
    let minilm = MiniLmEmbedder::load(minilm_config)?;

    let embedder: SharedEmbedder = if config.embedding_cache_capacity > 0 {
        Arc::new(CachedEmbedder::new(minilm, config.embedding_cache_capacity))
    } else {
        Arc::new(minilm)
    };

    let retriever = CandidateRetriever::new(wikipedia, duckduckgo, config.retriever_config());
    let detector = Detector::new(
        retriever,
        SimilarityScorer::new(embedder),
        config.detector_config(),
    )?;

    let app = create_router_with_state(HandlerState::new(detector));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Plagcheck shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
