use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::XAI_STATUS_HEADER;
use crate::pipeline::PipelineError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("internal error: {0}")]
    InternalError(String),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl GatewayError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::Pipeline(PipelineError::InvalidCorpus(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_corpus")
            }
            GatewayError::Pipeline(PipelineError::InvalidConfiguration { .. }) => {
                (StatusCode::BAD_REQUEST, "invalid_request")
            }
            GatewayError::Pipeline(PipelineError::ExternalService(_)) => {
                (StatusCode::BAD_GATEWAY, "provider_error")
            }
            GatewayError::Pipeline(PipelineError::InvariantViolation { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "invariant_violation")
            }
            GatewayError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, xai_status) = self.status();

        let mut headers = HeaderMap::new();
        headers.insert(XAI_STATUS_HEADER, HeaderValue::from_static(xai_status));

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
