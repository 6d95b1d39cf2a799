//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `XAI_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::classify::ClassifierConfig;
use crate::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_EXPLAIN_TIMEOUT_SECS, DEFAULT_HIGH_THRESHOLD,
    DEFAULT_LOW_THRESHOLD, DEFAULT_MODEL, DEFAULT_TOP_K, validate_thresholds,
};
use crate::explain::GenaiConfig;
use crate::pipeline::{PipelineConfig, PipelineResult};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `XAI_*` overrides on top of defaults.
#[derive(Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Lecture notes file, split into passages on blank lines. Unset: built-in samples.
    pub corpus_path: Option<PathBuf>,

    /// Chat model for generated explanations. Default: `deepseek-chat`.
    pub model: String,

    /// API key for the chat model. Unset: rule-based explanations only.
    pub api_key: Option<String>,

    /// OpenAI-compatible base URL for the chat model. Unset: the provider default.
    pub api_base_url: Option<String>,

    /// Passages retrieved per question. Default: `1`.
    pub top_k: usize,

    pub low_threshold: f32,
    pub high_threshold: f32,

    /// Default: `30`.
    pub explain_timeout_secs: u64,

    /// Max cached explanations; `0` disables caching. Default: `10_000`.
    pub cache_capacity: u64,

    /// Default: `false`.
    pub include_answer_in_query: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bind_addr", &self.bind_addr)
            .field("corpus_path", &self.corpus_path)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("top_k", &self.top_k)
            .field("low_threshold", &self.low_threshold)
            .field("high_threshold", &self.high_threshold)
            .field("explain_timeout_secs", &self.explain_timeout_secs)
            .field("cache_capacity", &self.cache_capacity)
            .field("include_answer_in_query", &self.include_answer_in_query)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            corpus_path: None,
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            api_base_url: None,
            top_k: DEFAULT_TOP_K,
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            explain_timeout_secs: DEFAULT_EXPLAIN_TIMEOUT_SECS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            include_answer_in_query: false,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "XAI_PORT";
    const ENV_BIND_ADDR: &'static str = "XAI_BIND_ADDR";
    const ENV_CORPUS_PATH: &'static str = "XAI_CORPUS_PATH";
    const ENV_MODEL: &'static str = "XAI_MODEL";
    const ENV_API_KEY: &'static str = "XAI_API_KEY";
    const ENV_API_BASE_URL: &'static str = "XAI_API_BASE_URL";
    const ENV_TOP_K: &'static str = "XAI_TOP_K";
    const ENV_LOW_THRESHOLD: &'static str = "XAI_LOW_THRESHOLD";
    const ENV_HIGH_THRESHOLD: &'static str = "XAI_HIGH_THRESHOLD";
    const ENV_EXPLAIN_TIMEOUT_SECS: &'static str = "XAI_EXPLAIN_TIMEOUT_SECS";
    const ENV_CACHE_CAPACITY: &'static str = "XAI_CACHE_CAPACITY";
    const ENV_INCLUDE_ANSWER_IN_QUERY: &'static str = "XAI_INCLUDE_ANSWER_IN_QUERY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let corpus_path = Self::parse_optional_string_from_env(Self::ENV_CORPUS_PATH)
            .map(PathBuf::from);
        let model = Self::parse_optional_string_from_env(Self::ENV_MODEL)
            .unwrap_or(defaults.model);
        let api_key = Self::parse_optional_string_from_env(Self::ENV_API_KEY);
        let api_base_url = Self::parse_optional_string_from_env(Self::ENV_API_BASE_URL);
        let top_k = Self::parse_number_from_env(Self::ENV_TOP_K, defaults.top_k)?;
        let low_threshold =
            Self::parse_number_from_env(Self::ENV_LOW_THRESHOLD, defaults.low_threshold)?;
        let high_threshold =
            Self::parse_number_from_env(Self::ENV_HIGH_THRESHOLD, defaults.high_threshold)?;
        let explain_timeout_secs = Self::parse_number_from_env(
            Self::ENV_EXPLAIN_TIMEOUT_SECS,
            defaults.explain_timeout_secs,
        )?;
        let cache_capacity =
            Self::parse_number_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity)?;
        let include_answer_in_query = Self::parse_flag_from_env(
            Self::ENV_INCLUDE_ANSWER_IN_QUERY,
            defaults.include_answer_in_query,
        )?;

        Ok(Self {
            port,
            bind_addr,
            corpus_path,
            model,
            api_key,
            api_base_url,
            top_k,
            low_threshold,
            high_threshold,
            explain_timeout_secs,
            cache_capacity,
            include_answer_in_query,
        })
    }

    /// Validates thresholds, non-zero settings and the corpus path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_thresholds(self.low_threshold, self.high_threshold)?;

        if self.top_k == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_TOP_K,
            });
        }
        if self.explain_timeout_secs == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_EXPLAIN_TIMEOUT_SECS,
            });
        }

        if let Some(ref path) = self.corpus_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn explain_timeout(&self) -> Duration {
        Duration::from_secs(self.explain_timeout_secs)
    }

    pub fn pipeline_config(&self) -> PipelineResult<PipelineConfig> {
        let classifier = ClassifierConfig::new(self.low_threshold, self.high_threshold)?;

        Ok(PipelineConfig::default()
            .with_top_k(self.top_k)
            .with_answer_in_query(self.include_answer_in_query)
            .with_explain_timeout(self.explain_timeout())
            .with_cache_capacity(self.cache_capacity)
            .with_classifier(classifier))
    }

    /// Chat backend settings, or `None` when no API key is configured.
    pub fn genai_config(&self) -> Option<GenaiConfig> {
        let key = self.api_key.as_ref()?;
        let config = GenaiConfig::new(key.clone()).with_model(self.model.clone());
        Some(match &self.api_base_url {
            Some(url) => config.with_endpoint(url.clone()),
            None => config,
        })
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_number_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidNumber {
                    name: var_name,
                    reason: e.to_string(),
                    value,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_flag_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidFlag {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }
}
