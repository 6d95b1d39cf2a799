//! Test server harness.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use xai::explain::{ExplanationBackend, MockExplainer};
use xai::gateway::{GatewayState, create_router};
use xai::pipeline::{Pipeline, PipelineConfig};
use xai::retrieval::{Corpus, RetrieverHandle};

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

pub fn tfidf_corpus() -> Corpus {
    Corpus::new([
        "TF-IDF is a term weighting scheme.",
        "Neural networks are a type of machine learning model.",
    ])
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn wait_for_server_ready(addr: SocketAddr) -> std::io::Result<()> {
    let start = std::time::Instant::now();

    loop {
        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(e) if start.elapsed() > Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS) => {
                return Err(e);
            }
            Err(_) => tokio::time::sleep(Duration::from_millis(STARTUP_POLL_INTERVAL_MS)).await,
        }
    }
}

/// Serves the gateway on an ephemeral port with `backend` and the two-passage TF-IDF corpus.
pub async fn spawn_test_server(backend: Arc<dyn ExplanationBackend>) -> std::io::Result<TestServer> {
    let pipeline = Pipeline::new(
        RetrieverHandle::from_corpus(tfidf_corpus()).expect("corpus should index"),
        backend,
        PipelineConfig::default(),
    )
    .expect("default config is valid");
    let app = create_router(GatewayState::new(pipeline));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server_handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    wait_for_server_ready(addr).await?;

    Ok(TestServer {
        addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

pub async fn spawn_mock_server(reply: &str) -> TestServer {
    spawn_test_server(Arc::new(MockExplainer::replying(reply)))
        .await
        .expect("Server should start")
}
