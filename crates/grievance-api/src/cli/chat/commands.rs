//! Slash command parsing and execution for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for the
//! conversation, help, and quick actions.

use console::style;

/// Canned openers for the three supported intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Register,
    Status,
    Mine,
}

impl QuickAction {
    /// The message sent on the user's behalf.
    pub fn prompt(self) -> &'static str {
        match self {
            QuickAction::Register => "I want to register a new complaint",
            QuickAction::Status => "I want to check my complaint status",
            QuickAction::Mine => "Show all my complaints",
        }
    }
}

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Drop the conversation and start over.
    New,
    /// Show conversation history.
    History,
    /// Show message counts.
    Stats,
    Quick(QuickAction),
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/new" | "/reset" => Some(ChatCommand::New),
        "/history" => Some(ChatCommand::History),
        "/stats" => Some(ChatCommand::Stats),
        "/register" => Some(ChatCommand::Quick(QuickAction::Register)),
        "/status" => Some(ChatCommand::Quick(QuickAction::Status)),
        "/mine" => Some(ChatCommand::Quick(QuickAction::Mine)),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!("  {}    {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}     {}", style("/exit").cyan(), "End the chat session");
    println!("  {}      {}", style("/new").cyan(), "Start a new conversation");
    println!("  {}  {}", style("/history").cyan(), "Show conversation history");
    println!("  {}    {}", style("/stats").cyan(), "Show message counts");
    println!();
    println!("  {}", style("Quick actions:").bold());
    println!();
    println!(
        "  {} {}",
        style("/register").cyan(),
        style(QuickAction::Register.prompt()).dim()
    );
    println!(
        "  {}   {}",
        style("/status").cyan(),
        style(QuickAction::Status.prompt()).dim()
    );
    println!(
        "  {}     {}",
        style("/mine").cyan(),
        style(QuickAction::Mine.prompt()).dim()
    );
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}
