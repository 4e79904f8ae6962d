//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(model: &str, backend_url: &str) {
    println!();
    println!("  🤖 {}", style("Grievance Assistant").cyan().bold());
    println!(
        "  {}",
        style("Register a complaint, check its status, or list complaints by mobile number.").dim()
    );
    println!();
    println!("  {}    {}", style("Model:").bold(), style(model).dim());
    println!("  {}  {}", style("Backend:").bold(), style(backend_url).dim());
    println!();
    println!(
        "  {}",
        style("Try /register, /status or /mine. Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
