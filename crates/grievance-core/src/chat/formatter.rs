//! Response formatter: tool results and router replies to user-facing text.
//!
//! Tools already produce readable text, so both success and failure payloads
//! pass through unchanged.

use grievance_types::error::RouterError;
use grievance_types::tool::ToolResult;

use crate::agent::router::RouterReply;

/// Reply when the router hits its round cap without an answer.
pub const ITERATION_LIMIT_REPLY: &str = "Agent stopped due to iteration limit or time limit.";

pub fn format_tool_result(result: &ToolResult) -> String {
    result.text().to_string()
}

pub fn format_reply(reply: &RouterReply) -> String {
    match reply {
        RouterReply::Answer(text) => text.clone(),
        RouterReply::IterationExceeded => ITERATION_LIMIT_REPLY.to_string(),
    }
}

/// Error turn text for a fault that escaped the router.
pub fn format_fault(err: &RouterError) -> String {
    format!("Error: {err}")
}
