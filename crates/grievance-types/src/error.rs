use thiserror::Error;

use crate::llm::LlmError;

/// Faults inside a tool. Never escapes a tool: each variant's `Display` is the
/// user-facing text of the resulting `ToolResult::Failure`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("Please provide all required information: name, mobile number, and complaint details.")]
    IncompleteInput,

    #[error("Error: {0}")]
    BackendUnavailable(String),

    #[error("No complaint found with ID: {0}")]
    NotFound(String),

    #[error("Failed to register complaint: {0}")]
    RegistrationRejected(String),

    #[error("Error fetching complaints")]
    ListFailed,
}

/// Errors from the complaint persistence service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("complaint not found")]
    NotFound,

    #[error("backend returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("{0}")]
    Transport(String),

    #[error("backend request timed out")]
    Timeout,

    #[error("invalid backend response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Whether the service could not be reached or answered unintelligibly.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            BackendError::Transport(_) | BackendError::Timeout | BackendError::Decode(_)
        )
    }
}

/// Faults in the agent router. Caught at the top of the turn pipeline.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Errors while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}
