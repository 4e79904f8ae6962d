//! Configuration for the OpenAI-compatible provider.

use std::time::Duration;

use secrecy::SecretString;

use grievance_types::config::LlmConfig;

/// Everything needed to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Model identifier (e.g., "gpt-3.5-turbo").
    pub model: String,
    pub timeout: Duration,
}

impl OpenAiCompatConfig {
    /// Build from the `[llm]` config section and an already-resolved key.
    pub fn from_llm_config(config: &LlmConfig, api_key: SecretString) -> Self {
        Self {
            provider_name: config.provider_name.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_from_llm_config_trims_trailing_slash() {
        let llm = LlmConfig {
            base_url: "http://localhost:11434/v1/".to_string(),
            timeout_secs: 5,
            ..LlmConfig::default()
        };
        let config = OpenAiCompatConfig::from_llm_config(&llm, SecretString::from("k"));
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.api_key.expose_secret(), "k");
    }
}
