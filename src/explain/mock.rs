//! Scripted explanation backend for tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::backend::ExplanationBackend;
use super::error::{ExplainError, ExplainResult};
use super::prompt::user_prompt;
use super::request::ExplanationRequest;

pub const MOCK_BACKEND: &str = "mock";

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Prompt,
    Fail(String),
    Empty,
}

#[derive(Debug)]
pub struct MockExplainer {
    reply: MockReply,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<ExplanationRequest>>,
}

impl MockExplainer {
    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Always answers `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Text(text.into()))
    }

    /// Answers with the user prompt it would have sent.
    pub fn echo_prompt() -> Self {
        Self::with_reply(MockReply::Prompt)
    }

    /// Always fails with a service error.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Fail(reason.into()))
    }

    /// Returns an empty body (malformed response).
    pub fn empty() -> Self {
        Self::with_reply(MockReply::Empty)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ExplanationRequest> {
        self.last_request.lock().clone()
    }
}

#[async_trait]
impl ExplanationBackend for MockExplainer {
    fn name(&self) -> &str {
        MOCK_BACKEND
    }

    async fn explain(&self, request: &ExplanationRequest) -> ExplainResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Prompt => Ok(user_prompt(request)),
            MockReply::Fail(reason) => Err(ExplainError::ServiceFailed {
                backend: MOCK_BACKEND.to_string(),
                reason: reason.clone(),
            }),
            MockReply::Empty => Err(ExplainError::MalformedResponse {
                backend: MOCK_BACKEND.to_string(),
                reason: "response contained no text".to_string(),
            }),
        }
    }
}
