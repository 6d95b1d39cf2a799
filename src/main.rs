//! Quiz XAI HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use xai::config::Config;
use xai::explain::{ExplanationBackend, GenaiExplainer, RuleBasedExplainer};
use xai::gateway::{GatewayState, create_router};
use xai::pipeline::Pipeline;
use xai::retrieval::{Corpus, RetrieverHandle};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
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
        model = %config.model,
        "Quiz XAI starting"
    );

    let corpus = match &config.corpus_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading lecture corpus");
            Corpus::from_file(path)?
        }
        None => {
            tracing::warn!("No XAI_CORPUS_PATH configured, using built-in sample lectures");
            Corpus::sample_lectures()
        }
    };
    let retriever = RetrieverHandle::from_corpus(corpus)?;
    tracing::info!(passages = retriever.load().len(), "Lecture corpus indexed");

    let backend: Arc<dyn ExplanationBackend> = match config.genai_config() {
        Some(genai_config) => Arc::new(GenaiExplainer::new(genai_config)?),
        None => {
            tracing::warn!("No XAI_API_KEY configured, using rule-based explanations");
            Arc::new(RuleBasedExplainer::new())
        }
    };

    let pipeline = Pipeline::new(retriever, backend, config.pipeline_config()?)?;
    let app = create_router(GatewayState::new(pipeline));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Quiz XAI shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var("XAI_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
