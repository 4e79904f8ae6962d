//! Backend reachability and configuration status command.

use std::path::Path;

use anyhow::Result;
use console::style;

use grievance_infra::config::load_global_config_strict;
use grievance_infra::llm::resolve_api_key;
use grievance_infra::repository::HttpComplaintRepository;

use crate::state::AppState;

/// Probe the complaint service and show the active configuration.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let config = &state.config;
    let backend = HttpComplaintRepository::new(&config.backend)?;
    let probe = backend.probe().await;
    let api_key_set = resolve_api_key(&config.llm).is_some();

    let (reachable, detail) = match &probe {
        Ok(code) => (true, format!("HTTP {}", code.as_u16())),
        Err(err) => (false, err.to_string()),
    };
    let config_error = match &state.config_path {
        Some(path) => config_problem(path).await,
        None => None,
    };
    let config_path = state
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "config_path": config_path,
            "config_error": config_error,
            "backend": {
                "base_url": config.backend.base_url,
                "reachable": reachable,
                "detail": detail,
            },
            "llm": {
                "provider": config.llm.provider_name,
                "base_url": config.llm.base_url,
                "model": config.llm.model,
                "api_key_env": config.llm.api_key_env,
                "api_key_set": api_key_set,
            },
            "agent": {
                "max_iterations": config.agent.max_iterations,
                "history_window": config.agent.history_window,
            },
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Grievance assistant v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Backend ──").dim());
    println!("  URL:       {}", style(&config.backend.base_url).cyan());
    println!("  Reachable: {} {}", check_mark(reachable), style(&detail).dim());
    println!();

    println!("  {}", style("── Model ──").dim());
    println!("  Provider:  {}", config.llm.provider_name);
    println!("  Model:     {}", style(&config.llm.model).bold());
    println!("  Endpoint:  {}", style(&config.llm.base_url).dim());
    println!(
        "  API key:   {} {}",
        check_mark(api_key_set),
        style(&config.llm.api_key_env).dim()
    );
    println!();

    println!("  {}", style("── Agent ──").dim());
    println!("  Max rounds:     {}", config.agent.max_iterations);
    println!(
        "  History window: {}",
        config
            .agent
            .history_window
            .map(|w| w.to_string())
            .unwrap_or_else(|| "unbounded".to_string())
    );
    println!("  Config:         {}", style(&config_path).dim());
    if let Some(problem) = &config_error {
        println!(
            "  {} {} {}",
            check_mark(false),
            problem,
            style("(defaults in use)").dim()
        );
    }
    println!();

    Ok(())
}

/// Why the config file at `path` was ignored, if it was.
async fn config_problem(path: &Path) -> Option<String> {
    load_global_config_strict(path).await.err().map(|e| e.to_string())
}

fn check_mark(ok: bool) -> String {
    if ok {
        format!("{}", style("✓").green())
    } else {
        format!("{}", style("✗").red())
    }
}
