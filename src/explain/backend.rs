use async_trait::async_trait;

use super::error::ExplainResult;
use super::request::ExplanationRequest;

#[async_trait]
/// Anything that can turn a structured explanation request into prose.
///
/// Implementations are opaque to the pipeline: the returned text is not parsed or validated.
pub trait ExplanationBackend: Send + Sync {
    /// Stable identifier used in logs, results and cache keys.
    fn name(&self) -> &str;

    /// Generates the explanation text.
    async fn explain(&self, request: &ExplanationRequest) -> ExplainResult<String>;
}
