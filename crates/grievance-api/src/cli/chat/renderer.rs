//! Terminal markdown rendering for assistant replies.

use termimad::MadSkin;
use termimad::crossterm::style::Color;

pub struct ChatRenderer {
    skin: MadSkin,
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(Color::Cyan);
        skin.headers[0].set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::Yellow);
        Self { skin }
    }

    /// Render a complete reply, indented to line up with the chat labels.
    pub fn render_final(&self, markdown: &str) -> String {
        let mut output = String::new();
        for line in markdown.lines() {
            let rendered = self.skin.inline(line).to_string();
            output.push_str("  ");
            output.push_str(&rendered);
            output.push('\n');
        }
        output
    }

    /// Print the stats footer after a reply.
    ///
    /// Format: "| {tokens} tokens . {rounds} rounds . {time}s . {model}"
    pub fn print_stats_footer(&self, tokens: u32, rounds: u32, response_ms: u64, model: &str) {
        let seconds = response_ms as f64 / 1000.0;
        let footer = format!(
            "  {} {} tokens {} {} rounds {} {:.1}s {} {}",
            console::style("|").dim(),
            console::style(tokens).dim(),
            console::style("\u{00b7}").dim(),
            console::style(rounds).dim(),
            console::style("\u{00b7}").dim(),
            console::style(seconds).dim(),
            console::style("\u{00b7}").dim(),
            console::style(model).dim(),
        );
        println!("{footer}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_every_line() {
        let renderer = ChatRenderer::new();
        let out = renderer.render_final("Complaint Status:\n- ID: CMP-1\n- Status: Open");
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("CMP-1"));
        assert!(out.lines().all(|l| l.starts_with("  ")));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(ChatRenderer::new().render_final(""), "");
    }
}
