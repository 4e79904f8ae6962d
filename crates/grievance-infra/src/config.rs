//! Global configuration loader for the grievance assistant.
//!
//! Reads `config.toml` and deserializes it into [`GlobalConfig`]. Falls back
//! to sensible defaults when the file is missing or malformed, then applies
//! environment overrides.

use std::path::{Path, PathBuf};

use grievance_types::config::GlobalConfig;
use grievance_types::error::ConfigError;

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "GRIEVANCE_CONFIG";
pub const BACKEND_URL_ENV: &str = "GRIEVANCE_BACKEND_URL";
pub const MODEL_ENV: &str = "GRIEVANCE_MODEL";
pub const LLM_BASE_URL_ENV: &str = "GRIEVANCE_LLM_BASE_URL";

/// Resolve which config file to read.
///
/// Priority:
/// 1. Explicit path (the `--config` flag)
/// 2. `GRIEVANCE_CONFIG`
/// 3. `{config_dir}/grievance/config.toml`
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("grievance").join("config.toml"))
}

/// Load global configuration from `path`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(path: &Path) -> GlobalConfig {
    match load_global_config_strict(path).await {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            GlobalConfig::default()
        }
    }
}

/// Like [`load_global_config`], but a present-and-broken file is an error.
/// A missing file still yields defaults.
pub async fn load_global_config_strict(path: &Path) -> Result<GlobalConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return Ok(GlobalConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };

    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Apply `GRIEVANCE_*` environment overrides.
pub fn apply_env_overrides(config: &mut GlobalConfig) {
    apply_overrides(config, |key| std::env::var(key).ok());
}

fn apply_overrides(config: &mut GlobalConfig, lookup: impl Fn(&str) -> Option<String>) {
    let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = value(BACKEND_URL_ENV) {
        config.backend.base_url = url;
    }
    if let Some(model) = value(MODEL_ENV) {
        config.llm.model = model;
    }
    if let Some(url) = value(LLM_BASE_URL_ENV) {
        config.llm.base_url = url;
    }
}

/// Resolve, load and override in one step. `None` path means defaults only.
pub async fn load_effective_config(explicit: Option<&Path>) -> GlobalConfig {
    let mut config = match resolve_config_path(explicit) {
        Some(path) => load_global_config(&path).await,
        None => GlobalConfig::default(),
    };
    apply_env_overrides(&mut config);
    config
}
