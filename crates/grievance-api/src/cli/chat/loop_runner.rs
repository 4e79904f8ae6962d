//! Main chat loop.
//!
//! Builds a session, prints the banner, then reads lines until the user
//! exits. Slash commands are handled locally; everything else becomes a
//! conversation turn.

use std::time::{Duration, Instant};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use grievance_types::chat::TurnRole;

use crate::state::{AppState, ConcreteSession};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent, prompt_for};
use super::renderer::ChatRenderer;

const PREVIEW_CHARS: usize = 100;

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let mut session = state.build_session()?;
    let renderer = ChatRenderer::new();

    print_welcome_banner(&state.config.llm.model, &state.config.backend.base_url);
    info!(model = %state.config.llm.model, "chat session started");

    let (mut input, _writer) = ChatInput::new(prompt_for(0))
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match input.next_event().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Goodbye!").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Line(text) if text.is_empty() => continue,
            InputEvent::Line(text) => text,
        };

        let message = match commands::parse(&text) {
            None => text,
            Some(ChatCommand::Quick(action)) => {
                println!("  {} {}", style("→").dim(), style(action.prompt()).dim());
                action.prompt().to_string()
            }
            Some(ChatCommand::Help) => {
                commands::print_help();
                continue;
            }
            Some(ChatCommand::Clear) => {
                input.clear();
                continue;
            }
            Some(ChatCommand::Exit) => {
                println!("\n  {}", style("Goodbye!").dim());
                break;
            }
            Some(ChatCommand::New) => {
                session.reset_conversation();
                input.set_prompt(&prompt_for(0));
                println!("\n  {} Started a new conversation.\n", style("*").cyan().bold());
                continue;
            }
            Some(ChatCommand::History) => {
                print_history(&session);
                continue;
            }
            Some(ChatCommand::Stats) => {
                let stats = session.stats();
                println!(
                    "\n  {} {} messages from you, {} replies\n",
                    style("*").cyan().bold(),
                    stats.user_turns,
                    stats.assistant_turns
                );
                continue;
            }
            Some(ChatCommand::Unknown(name)) => {
                println!(
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(name).dim()
                );
                continue;
            }
        };

        let spinner = thinking_spinner();
        let started = Instant::now();
        let report = session.submit_turn_detailed(&message).await;
        spinner.finish_and_clear();
        let elapsed_ms = started.elapsed().as_millis() as u64;

        println!();
        if report.failed {
            println!("  {} {}", style("!").red().bold(), report.reply);
        } else {
            println!("  {}", style("Assistant").cyan().bold());
            print!("{}", renderer.render_final(&report.reply));
        }

        if let Some(outcome) = &report.outcome {
            debug!(
                rounds = outcome.rounds,
                tools = outcome.tool_invocations.len(),
                "turn complete"
            );
            renderer.print_stats_footer(
                outcome.usage.input_tokens + outcome.usage.output_tokens,
                outcome.rounds,
                elapsed_ms,
                &session.router().config().model,
            );
        }
        println!();

        input.set_prompt(&prompt_for(session.stats().user_turns));
    }

    input.finish();
    Ok(())
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn print_history(session: &ConcreteSession) {
    let history = session.history();
    println!();
    if history.is_empty() {
        println!("  {}", style("No messages yet.").dim());
    }
    for turn in history {
        let label = match turn.role {
            TurnRole::User => style("You").green().bold(),
            TurnRole::Assistant => style("Assistant").cyan().bold(),
        };
        println!(
            "  {} {} {}",
            style(turn.created_at.format("%H:%M:%S")).dim(),
            label,
            preview(&turn.text, PREVIEW_CHARS)
        );
    }
    println!();
}

/// First line of `text`, cut to at most `max` characters.
fn preview(text: &str, max: usize) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let more_lines = text.lines().nth(1).is_some();
    if first_line.chars().count() > max {
        let cut: String = first_line.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else if more_lines {
        format!("{first_line} ...")
    } else {
        first_line.to_string()
    }
}
