//! Chat-completion backend built on the `genai` multi-provider client.

use async_trait::async_trait;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use genai::resolver::{AuthData, AuthResolver, Endpoint, ServiceTargetResolver};
use genai::{Client, ModelIden, ServiceTarget};
use tracing::{debug, error};

use super::backend::ExplanationBackend;
use super::error::{ExplainError, ExplainResult};
use super::prompt::Prompt;
use super::request::ExplanationRequest;
use crate::constants::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

#[derive(Clone)]
pub struct GenaiConfig {
    /// Provider model name; `genai` picks the adapter from it (e.g. `deepseek-chat`).
    pub model: String,

    /// Provider API key. Always explicit; never resolved from the process environment.
    pub api_key: String,

    pub temperature: f64,

    pub max_tokens: u32,

    /// OpenAI-compatible base URL overriding the provider default (e.g. a proxy or a
    /// self-hosted gateway). Always stored with a trailing `/`.
    pub endpoint: Option<String>,
}

impl std::fmt::Debug for GenaiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiConfig")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl GenaiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            endpoint: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let mut endpoint = endpoint.into().trim().to_string();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        self.endpoint = Some(endpoint);
        self
    }

    pub fn validate(&self) -> ExplainResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(ExplainError::NotConfigured {
                reason: "API key is empty".to_string(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ExplainError::NotConfigured {
                reason: "model name is empty".to_string(),
            });
        }
        if let Some(endpoint) = &self.endpoint
            && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ExplainError::NotConfigured {
                reason: format!("endpoint must be an http(s) URL, got {endpoint:?}"),
            });
        }
        Ok(())
    }
}

pub struct GenaiExplainer {
    client: Client,
    config: GenaiConfig,
}

impl std::fmt::Debug for GenaiExplainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiExplainer")
            .field("config", &self.config)
            .finish()
    }
}

impl GenaiExplainer {
    pub fn new(config: GenaiConfig) -> ExplainResult<Self> {
        config.validate()?;

        let api_key = config.api_key.clone();
        let auth_resolver = AuthResolver::from_resolver_fn(
            move |_model_iden: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
                Ok(Some(AuthData::from_single(api_key.clone())))
            },
        );

        let mut builder = Client::builder().with_auth_resolver(auth_resolver);
        if let Some(endpoint) = config.endpoint.clone() {
            let target_resolver = ServiceTargetResolver::from_resolver_fn(
                move |target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
                    Ok(ServiceTarget {
                        endpoint: Endpoint::from_owned(endpoint.clone()),
                        ..target
                    })
                },
            );
            builder = builder.with_service_target_resolver(target_resolver);
        }
        let client = builder.build();

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GenaiConfig {
        &self.config
    }
}

#[async_trait]
impl ExplanationBackend for GenaiExplainer {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn explain(&self, request: &ExplanationRequest) -> ExplainResult<String> {
        let prompt = Prompt::for_request(request);

        let chat_request = ChatRequest::new(vec![
            ChatMessage::system(prompt.system),
            ChatMessage::user(prompt.user),
        ]);
        let options = ChatOptions::default()
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);

        debug!(
            model = %self.config.model,
            passages = request.passages.len(),
            "Requesting explanation"
        );

        let response = self
            .client
            .exec_chat(&self.config.model, chat_request, Some(&options))
            .await
            .map_err(|e| {
                error!(model = %self.config.model, "Explanation provider error: {}", e);
                ExplainError::ServiceFailed {
                    backend: self.config.model.clone(),
                    reason: e.to_string(),
                }
            })?;

        response
            .first_text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ExplainError::MalformedResponse {
                backend: self.config.model.clone(),
                reason: "response contained no text".to_string(),
            })
    }
}
