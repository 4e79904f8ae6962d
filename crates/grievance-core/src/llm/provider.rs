//! LlmProvider trait definition.
//!
//! This is the core abstraction that all LLM providers implement.

use grievance_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends that support tool calling.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in grievance-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Model the provider was configured with.
    fn model(&self) -> &str;

    /// Send a completion request and receive the full response, including
    /// any tool calls the model chose to make.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
