use std::time::Duration;

/// Default chat-completions endpoint (Groq's OpenAI-compatible API).
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model used for extraction.
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";

/// Configuration for the LLM extraction path.
///
/// Passed explicitly at construction so the extractor never reads ambient
/// process state mid-call. A missing `api_key` is the recognized
/// "LLM unavailable" state and routes straight to the fallback extractor.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    /// Near-deterministic sampling to minimize output variance.
    pub temperature: f32,
    pub max_tokens: u32,
    /// Bound on the single request attempt. No retries are performed.
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.1,
            max_tokens: 1000,
            timeout: Duration::from_secs(30),
        }
    }
}

impl LlmConfig {
    /// Builds a config from the process environment.
    ///
    /// Reads `GROQ_API_KEY` for the credential, with optional
    /// `LLM_ENDPOINT` / `LLM_MODEL` overrides. An unset or empty key leaves
    /// `api_key` as `None`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if let Ok(endpoint) = std::env::var("LLM_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint;
            }
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_api_key() {
        let config = LlmConfig::default().with_api_key("sk-test");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    }
}
