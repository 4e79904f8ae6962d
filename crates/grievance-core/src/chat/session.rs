//! Per-session entry point tying conversation state to the agent router.
//!
//! One `GrievanceSession` per conversation; turns must be submitted one at a
//! time (`&mut self` enforces it).

use tracing::{error, info};

use grievance_types::chat::Turn;

use crate::agent::router::{AgentRouter, RouterOutcome};
use crate::repository::complaint::ComplaintRepository;

use super::conversation::ConversationState;
use super::formatter::{format_fault, format_reply};

/// Result of one submitted turn.
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub reply: String,
    /// Router diagnostics; `None` for faults and ignored input.
    pub outcome: Option<RouterOutcome>,
    pub failed: bool,
}

/// Message counts for the current conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub user_turns: usize,
    pub assistant_turns: usize,
}

pub struct GrievanceSession<R> {
    state: ConversationState,
    router: AgentRouter<R>,
}

impl<R: ComplaintRepository> GrievanceSession<R> {
    pub fn new(router: AgentRouter<R>) -> Self {
        Self {
            state: ConversationState::new(),
            router,
        }
    }

    /// Process one user turn and return the assistant's reply.
    pub async fn submit_turn(&mut self, user_text: &str) -> String {
        self.submit_turn_detailed(user_text).await.reply
    }

    /// Like [`submit_turn`](Self::submit_turn), also returning router diagnostics.
    ///
    /// Whitespace-only input is ignored: no state change, empty reply. A router
    /// fault still produces an assistant turn carrying the error text.
    pub async fn submit_turn_detailed(&mut self, user_text: &str) -> TurnReport {
        if user_text.trim().is_empty() {
            return TurnReport {
                reply: String::new(),
                outcome: None,
                failed: false,
            };
        }

        self.state.append(Turn::user(user_text));
        let window = self.router.config().history_window;
        let routed = self.router.route(self.state.context(window)).await;

        let report = match routed {
            Ok(outcome) => {
                info!(
                    rounds = outcome.rounds,
                    tools = outcome.tool_invocations.len(),
                    "Turn complete"
                );
                TurnReport {
                    reply: format_reply(&outcome.reply),
                    outcome: Some(outcome),
                    failed: false,
                }
            }
            Err(err) => {
                error!(error = %err, "Router fault");
                TurnReport {
                    reply: format_fault(&err),
                    outcome: None,
                    failed: true,
                }
            }
        };

        self.state.append(Turn::assistant(report.reply.clone()));
        report
    }

    /// Start a new conversation.
    pub fn reset_conversation(&mut self) {
        self.state.clear();
    }

    pub fn history(&self) -> &[Turn] {
        self.state.history()
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            user_turns: self.state.user_turn_count(),
            assistant_turns: self.state.assistant_turn_count(),
        }
    }

    pub fn router(&self) -> &AgentRouter<R> {
        &self.router
    }
}
