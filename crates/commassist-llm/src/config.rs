use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment lookup seam so configuration can be tested without touching
/// the process environment.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment.
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API key (`OPENAI_API_KEY`).
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API.
    /// Env: `OPENAI_BASE_URL`. Default: `"https://api.openai.com/v1"`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Env: `OPENAI_DEFAULT_MODEL`. Default: `"gpt-4o-mini"`.
    #[serde(default = "default_model")]
    pub model: String,
    /// Env: `OPENAI_DEFAULT_MAX_TOKENS`. Default: `1024`.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Number of attempts on 429 / 5xx errors.
    /// Env: `OPENAI_RETRY_ATTEMPTS`. Default: `3`.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Per-request timeout. Env: `OPENAI_TIMEOUT_SECS`. Default: `60`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            retry_attempts: default_retry_attempts(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    pub fn from_env<E: ReadEnv>(env: &E) -> Result<Self> {
        let api_key = env
            .var("OPENAI_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::Config("OPENAI_API_KEY not set".to_string()))?;

        let base_url = env
            .var("OPENAI_BASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_base_url);

        let model = env
            .var("OPENAI_DEFAULT_MODEL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_model);

        let max_tokens = env
            .var("OPENAI_DEFAULT_MAX_TOKENS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_tokens);

        let retry_attempts = env
            .var("OPENAI_RETRY_ATTEMPTS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_retry_attempts);

        let timeout_secs = env
            .var("OPENAI_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        Ok(Self {
            api_key,
            base_url,
            model,
            max_tokens,
            retry_attempts,
            timeout_secs,
            ..Self::default()
        })
    }

    /// Fail fast on settings that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::Config("OPENAI_API_KEY not set".to_string()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn default_api_key() -> String {
    std::env::var("OPENAI_API_KEY").unwrap_or_default()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.8
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    60
}
