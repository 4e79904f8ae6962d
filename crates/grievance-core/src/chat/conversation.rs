//! Conversation state: the ordered transcript of one session.

use grievance_types::chat::{Turn, TurnRole};

/// Append-only log of turns, cleared wholesale on reset.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    turns: Vec<Turn>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns in insertion order.
    pub fn history(&self) -> &[Turn] {
        &self.turns
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// The last `window` turns (all of them if fewer exist).
    pub fn recent(&self, window: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(window);
        &self.turns[start..]
    }

    /// Turns to send as model context: the whole history unless a window is set.
    /// A window never drops the newest turn, so `Some(0)` behaves like `Some(1)`.
    pub fn context(&self, window: Option<usize>) -> &[Turn] {
        match window {
            Some(window) => self.recent(window.max(1)),
            None => self.history(),
        }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn user_turn_count(&self) -> usize {
        self.count(TurnRole::User)
    }

    pub fn assistant_turn_count(&self) -> usize {
        self.count(TurnRole::Assistant)
    }

    fn count(&self, role: TurnRole) -> usize {
        self.turns.iter().filter(|t| t.role == role).count()
    }
}
