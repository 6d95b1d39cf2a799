use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::XAI_STATUS_HEADER;
use super::error::GatewayError;
use super::state::GatewayState;
use crate::pipeline::QuizAnswer;

/// Body of `PUT /v1/corpus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusUpdate {
    pub passages: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CorpusUpdated {
    pub status: &'static str,
    pub passages: usize,
}

pub const XAI_STATUS_CORPUS_UPDATED: &str = "corpus_updated";

#[instrument(skip(state, request), fields(question_len = tracing::field::Empty))]
pub async fn explain_handler(
    State(state): State<GatewayState>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError> {
    let answer: QuizAnswer = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;

    if answer.question.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "question must not be empty".to_string(),
        ));
    }
    tracing::Span::current().record("question_len", answer.question.len());

    let result = state.pipeline.explain_or_fallback(&answer).await?;
    debug!(
        request_id = %result.request_id,
        status = %result.status,
        source = result.explanation.source(),
        "Explanation ready"
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        XAI_STATUS_HEADER,
        HeaderValue::from_static(result.explanation.source()),
    );

    Ok((StatusCode::OK, headers, Json(result)).into_response())
}

#[instrument(skip(state, request))]
pub async fn replace_corpus_handler(
    State(state): State<GatewayState>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError> {
    let update: CorpusUpdate = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid corpus schema: {}", e)))?;

    let pipeline = state.pipeline.clone();
    let passages = tokio::task::spawn_blocking(move || pipeline.replace_corpus(update.passages))
        .await
        .map_err(|e| GatewayError::InternalError(format!("Corpus rebuild task failed: {}", e)))??;

    info!(passages, "Corpus updated via API");

    let mut headers = HeaderMap::new();
    headers.insert(
        XAI_STATUS_HEADER,
        HeaderValue::from_static(XAI_STATUS_CORPUS_UPDATED),
    );

    Ok((
        StatusCode::OK,
        headers,
        Json(CorpusUpdated {
            status: "ok",
            passages,
        }),
    )
        .into_response())
}
