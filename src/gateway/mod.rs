//! HTTP gateway (Axum) in front of the explanation pipeline.
//!
//! Routes:
//! - `GET /healthz` - liveness
//! - `GET /ready` - corpus size and backend name (a pipeline always holds a non-empty index)
//! - `POST /v1/explain` - [`QuizAnswer`](crate::pipeline::QuizAnswer) in,
//!   [`XaiResult`](crate::pipeline::XaiResult) out (rule-based fallback on backend failure)
//! - `PUT /v1/corpus` - rebuild the index from `{"passages": [...]}`
//!
//! Every response carries [`XAI_STATUS_HEADER`].

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{CorpusUpdate, explain_handler, replace_corpus_handler};
pub use state::GatewayState;

/// Response header carrying a short machine-readable outcome.
pub const XAI_STATUS_HEADER: &str = "X-Xai-Status";
pub const XAI_STATUS_HEALTHY: &str = "healthy";
pub const XAI_STATUS_READY: &str = "ready";

pub fn create_router(state: GatewayState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/v1/explain", post(explain_handler))
        .route("/v1/corpus", put(replace_corpus_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub passages: usize,
    pub backend: String,
    pub cache_enabled: bool,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        XAI_STATUS_HEADER,
        HeaderValue::from_static(XAI_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<GatewayState>) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(XAI_STATUS_HEADER, HeaderValue::from_static(XAI_STATUS_READY));

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            passages: state.pipeline.corpus_len(),
            backend: state.pipeline.backend_name().to_string(),
            cache_enabled: state.pipeline.cache().is_some(),
        }),
    )
        .into_response()
}
