//! Application state wiring config, adapters and the session together.
//!
//! The session is generic over the complaint repository; `ConcreteSession`
//! pins it to the HTTP implementation.

use std::path::{Path, PathBuf};

use anyhow::Context;

use grievance_core::agent::router::{AgentRouter, RouterConfig};
use grievance_core::chat::session::GrievanceSession;
use grievance_core::tool::ComplaintTools;
use grievance_infra::config::{load_effective_config, resolve_config_path};
use grievance_infra::llm::{create_provider, resolve_api_key};
use grievance_infra::repository::HttpComplaintRepository;
use grievance_types::config::GlobalConfig;

pub type ConcreteSession = GrievanceSession<HttpComplaintRepository>;

pub struct AppState {
    pub config: GlobalConfig,
    /// File the config was read from (it may not exist).
    pub config_path: Option<PathBuf>,
}

impl AppState {
    /// Load the effective configuration: file, then env overrides.
    pub async fn init(explicit_config: Option<&Path>) -> Self {
        let config_path = resolve_config_path(explicit_config);
        let config = load_effective_config(explicit_config).await;
        Self {
            config,
            config_path,
        }
    }

    /// Build a fresh conversation session against the configured services.
    pub fn build_session(&self) -> anyhow::Result<ConcreteSession> {
        let api_key = resolve_api_key(&self.config.llm).with_context(|| {
            format!(
                "{} is not set. Export your API key before chatting.",
                self.config.llm.api_key_env
            )
        })?;
        let provider = create_provider(&self.config.llm, Some(api_key))?;
        let repo = HttpComplaintRepository::new(&self.config.backend)?;

        let router = AgentRouter::new(
            provider,
            ComplaintTools::new(repo),
            RouterConfig::from_config(&self.config),
        );
        Ok(GrievanceSession::new(router))
    }
}
