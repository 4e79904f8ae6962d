//! Conversation handling: transcript, reply formatting and the session entry point.

pub mod conversation;
pub mod formatter;
pub mod session;

pub use conversation::ConversationState;
pub use session::{GrievanceSession, SessionStats, TurnReport};
