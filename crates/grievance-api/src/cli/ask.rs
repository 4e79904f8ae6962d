//! Single-turn `grv ask` command.

use anyhow::Result;
use console::style;

use grievance_core::chat::session::TurnReport;

use crate::state::AppState;

use super::chat::renderer::ChatRenderer;

pub async fn ask(state: &AppState, message: &str, json: bool) -> Result<()> {
    let mut session = state.build_session()?;
    let report = session.submit_turn_detailed(message).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
        return Ok(());
    }

    if report.failed {
        anyhow::bail!(report.reply);
    }

    let renderer = ChatRenderer::new();
    println!();
    println!("  {}", style("Assistant").cyan().bold());
    println!("{}", renderer.render_final(&report.reply));
    Ok(())
}

fn report_json(report: &TurnReport) -> serde_json::Value {
    let tools: Vec<&str> = report
        .outcome
        .as_ref()
        .map(|o| o.tool_invocations.iter().map(|t| t.invocation.tool.as_str()).collect())
        .unwrap_or_default();

    serde_json::json!({
        "reply": report.reply,
        "failed": report.failed,
        "rounds": report.outcome.as_ref().map(|o| o.rounds),
        "tools": tools,
    })
}
