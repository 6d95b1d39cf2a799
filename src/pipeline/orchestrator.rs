use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::config::PipelineConfig;
use super::error::{PipelineError, PipelineResult};
use super::types::{Explanation, QuizAnswer, XaiResult};
use crate::classify::AnswerClassifier;
use crate::explain::{
    ExplainError, ExplainResult, ExplanationBackend, ExplanationCache, ExplanationRequest, Prompt,
    RuleBasedExplainer, review_topic,
};
use crate::retrieval::{Corpus, RetrieverHandle};

/// Retrieval, classification and explanation for one corpus and one backend.
///
/// Retrieval and classification run inline on the caller's task. Only the backend call awaits,
/// bounded by [`PipelineConfig::explain_timeout`].
pub struct Pipeline {
    retriever: RetrieverHandle,
    classifier: AnswerClassifier,
    backend: Arc<dyn ExplanationBackend>,
    fallback: RuleBasedExplainer,
    cache: Option<ExplanationCache>,
    config: PipelineConfig,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("retriever", &self.retriever)
            .field("classifier", &self.classifier)
            .field("backend", &self.backend.name())
            .field("cache", &self.cache)
            .field("config", &self.config)
            .finish()
    }
}

impl Pipeline {
    pub fn new(
        retriever: RetrieverHandle,
        backend: Arc<dyn ExplanationBackend>,
        config: PipelineConfig,
    ) -> PipelineResult<Self> {
        config.validate()?;

        let cache = (config.cache_capacity > 0)
            .then(|| ExplanationCache::with_capacity(config.cache_capacity));

        Ok(Self {
            retriever,
            classifier: AnswerClassifier::new(config.classifier),
            backend,
            fallback: RuleBasedExplainer::new(),
            cache,
            config,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn retriever(&self) -> &RetrieverHandle {
        &self.retriever
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn corpus_len(&self) -> usize {
        self.retriever.load().len()
    }

    pub fn cache(&self) -> Option<&ExplanationCache> {
        self.cache.as_ref()
    }

    /// Runs retrieval and classification and builds the backend request.
    ///
    /// An empty retrieval is not an error; the request then carries no passages.
    pub fn prepare(&self, answer: &QuizAnswer) -> PipelineResult<ExplanationRequest> {
        let k = answer.top_k.unwrap_or(self.config.top_k);
        if k == 0 {
            return Err(PipelineError::InvalidConfiguration {
                reason: "top_k must be at least 1".to_string(),
            });
        }

        let query = if self.config.include_answer_in_query {
            format!("{} {}", answer.question, answer.correct_answer)
        } else {
            answer.question.clone()
        };

        let retriever = self.retriever.load();
        let passages = retriever.retrieve_passages(&query, k);
        let classification = self
            .classifier
            .classify(&answer.student_answer, &answer.correct_answer)?;

        debug!(
            passages = passages.len(),
            category = %classification.category,
            confidence = classification.confidence,
            "Answer prepared"
        );

        Ok(ExplanationRequest::new(
            answer.question.clone(),
            answer.student_answer.clone(),
            answer.correct_answer.clone(),
            passages,
            classification,
        ))
    }

    /// Full run; backend failures and timeouts are returned as errors.
    #[instrument(skip_all, fields(backend = %self.backend.name()))]
    pub async fn explain(&self, answer: &QuizAnswer) -> PipelineResult<XaiResult> {
        let request = self.prepare(answer)?;
        let explanation = self.generate(&request).await?;
        Ok(self.assemble(request, explanation))
    }

    /// Full run; backend failures and timeouts fall back to the rule-based explanation.
    ///
    /// Retrieval and classification errors are still returned.
    #[instrument(skip_all, fields(backend = %self.backend.name()))]
    pub async fn explain_or_fallback(&self, answer: &QuizAnswer) -> PipelineResult<XaiResult> {
        let request = self.prepare(answer)?;
        let explanation = match self.generate(&request).await {
            Ok(explanation) => explanation,
            Err(err) => {
                warn!(error = %err, "Explanation backend failed, using rule-based fallback");
                Explanation::Fallback {
                    text: self.fallback.render(&request),
                    reason: err.to_string(),
                }
            }
        };
        Ok(self.assemble(request, explanation))
    }

    /// Rebuilds the index for `corpus` and swaps it in. Returns the new passage count.
    ///
    /// On error the current corpus stays in place.
    pub fn replace_corpus(&self, corpus: impl Into<Corpus>) -> PipelineResult<usize> {
        let retriever = self.retriever.rebuild(corpus)?;
        if let Some(cache) = &self.cache {
            cache.clear();
        }
        info!(passages = retriever.len(), "Corpus replaced");
        Ok(retriever.len())
    }

    async fn generate(&self, request: &ExplanationRequest) -> ExplainResult<Explanation> {
        let backend = self.backend.name().to_string();
        let key = self
            .cache
            .as_ref()
            .map(|_| ExplanationCache::key(&backend, &Prompt::for_request(request)));

        if let (Some(cache), Some(key)) = (&self.cache, &key)
            && let Some(text) = cache.get(key)
        {
            debug!("Explanation cache hit");
            return Ok(Explanation::Cached { text, backend });
        }

        let timeout = self.config.explain_timeout;
        let text = match tokio::time::timeout(timeout, self.backend.explain(request)).await {
            Ok(result) => result?,
            Err(_) => return Err(ExplainError::Timeout { timeout }),
        };

        if let (Some(cache), Some(key)) = (&self.cache, key) {
            cache.insert(key, text.clone());
        }

        Ok(Explanation::Generated { text, backend })
    }

    fn assemble(&self, request: ExplanationRequest, explanation: Explanation) -> XaiResult {
        let status = request.classification.status();
        let review_topic = review_topic(status, request.top_passage());

        XaiResult {
            request_id: Uuid::new_v4(),
            question: request.question,
            student_answer: request.student_answer,
            correct_answer: request.correct_answer,
            status,
            passages: request.passages,
            classification: request.classification,
            explanation,
            review_topic,
            created_at: Utc::now(),
        }
    }
}
