//! Agent routing for the grievance assistant.
//!
//! - `prompt`: the fixed instruction prompt
//! - `router`: `AgentRouter`, which decides per turn whether to answer or run a tool

pub mod prompt;
pub mod router;

pub use router::{AgentRouter, ExecutedTool, RouterConfig, RouterOutcome, RouterReply};
