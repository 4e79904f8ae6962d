//! LLM provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `grievance-core`, plus a factory ([`create_provider`])
//! that builds a [`BoxLlmProvider`] from the `[llm]` config section.
//!
//! [`LlmProvider`]: grievance_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;

use grievance_core::llm::box_provider::BoxLlmProvider;
use grievance_types::config::LlmConfig;
use grievance_types::llm::LlmError;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::OpenAiCompatConfig;

/// Read the API key from the environment variable named in the config.
pub fn resolve_api_key(config: &LlmConfig) -> Option<SecretString> {
    std::env::var(&config.api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .map(SecretString::from)
}

/// Create a [`BoxLlmProvider`] from the `[llm]` config section.
///
/// # Errors
///
/// Returns `AuthenticationFailed` when no API key is available.
pub fn create_provider(
    config: &LlmConfig,
    api_key: Option<SecretString>,
) -> Result<BoxLlmProvider, LlmError> {
    let key = api_key.ok_or(LlmError::AuthenticationFailed)?;
    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig::from_llm_config(config, key))?;
    Ok(BoxLlmProvider::new(provider))
}
