//! Agent router: one user turn through the model and at most one tool.
//!
//! Each round sends the system prompt, the conversation context and any
//! tool traffic so far. The model either answers or asks for a tool. Once a
//! tool has run, later rounds are sent without tool definitions so the model
//! must fold the result into an answer. The number of rounds is capped.

use serde_json::Value;
use tracing::{Instrument, debug, info, info_span, warn};

use grievance_types::chat::Turn;
use grievance_types::config::GlobalConfig;
use grievance_types::error::RouterError;
use grievance_types::llm::{CompletionRequest, Message, ToolCall, Usage};
use grievance_types::tool::{ToolInvocation, ToolName, ToolResult};

use crate::chat::formatter::format_tool_result;
use crate::llm::box_provider::BoxLlmProvider;
use crate::repository::complaint::ComplaintRepository;
use crate::tool::ComplaintTools;

use super::prompt::SYSTEM_PROMPT;

const ONE_TOOL_PER_TURN: &str = "Only one tool can be used per request.";

/// Model parameters and limits for routing.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub max_iterations: u32,
    pub history_window: Option<usize>,
}

impl RouterConfig {
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            model: config.llm.model.clone(),
            max_tokens: config.llm.max_tokens,
            temperature: config.llm.temperature,
            max_iterations: config.agent.max_iterations,
            history_window: config.agent.history_window,
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::from_config(&GlobalConfig::default())
    }
}

/// How a routed turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterReply {
    Answer(String),
    IterationExceeded,
}

/// A tool call that was dispatched, with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedTool {
    pub invocation: ToolInvocation,
    pub result: ToolResult,
}

/// Everything the router did for one user turn.
#[derive(Debug, Clone)]
pub struct RouterOutcome {
    pub reply: RouterReply,
    pub tool_invocations: Vec<ExecutedTool>,
    pub rounds: u32,
    pub usage: Usage,
}

/// Wraps the language model with the complaint tools and the system prompt.
pub struct AgentRouter<R> {
    provider: BoxLlmProvider,
    tools: ComplaintTools<R>,
    config: RouterConfig,
}

impl<R: ComplaintRepository> AgentRouter<R> {
    pub fn new(provider: BoxLlmProvider, tools: ComplaintTools<R>, config: RouterConfig) -> Self {
        Self {
            provider,
            tools,
            config,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Route one user turn.
    ///
    /// `context` is the conversation so far, ending with the latest user turn.
    /// Model faults are returned as `RouterError`; tool faults never are.
    pub async fn route(&self, context: &[Turn]) -> Result<RouterOutcome, RouterError> {
        let mut messages: Vec<Message> = context.iter().map(Message::from).collect();
        let mut executed: Vec<ExecutedTool> = Vec::new();
        let mut usage = Usage::default();

        for round in 1..=self.config.max_iterations {
            let tool_ran = !executed.is_empty();
            let request = CompletionRequest {
                model: self.config.model.clone(),
                messages: messages.clone(),
                system: Some(SYSTEM_PROMPT.to_string()),
                max_tokens: self.config.max_tokens,
                temperature: Some(self.config.temperature),
                tools: if tool_ran {
                    Vec::new()
                } else {
                    ComplaintTools::<R>::definitions()
                },
            };

            let span = info_span!(
                "gen_ai.complete",
                gen_ai.system = self.provider.name(),
                gen_ai.request.model = %request.model,
                gen_ai.request.max_tokens = request.max_tokens,
                gen_ai.request.temperature = ?request.temperature,
                round,
            );
            let response = self.provider.complete(&request).instrument(span).await?;
            usage.add(response.usage);

            if response.tool_calls.is_empty() {
                let answer = response.content.trim();
                if !answer.is_empty() {
                    info!(rounds = round, tools = executed.len(), "Turn answered");
                    return Ok(RouterOutcome {
                        reply: RouterReply::Answer(answer.to_string()),
                        tool_invocations: executed,
                        rounds: round,
                        usage,
                    });
                }
                if let Some(last) = executed.last() {
                    debug!("Empty answer after tool; returning tool output");
                    return Ok(RouterOutcome {
                        reply: RouterReply::Answer(format_tool_result(&last.result)),
                        tool_invocations: executed,
                        rounds: round,
                        usage,
                    });
                }
                debug!(round, "Empty answer without tool call");
                continue;
            }

            messages.push(Message::assistant_with_tool_calls(
                response.content.clone(),
                response.tool_calls.clone(),
            ));
            for call in &response.tool_calls {
                let output = self.dispatch(call, &mut executed).await;
                messages.push(Message::tool_output(call.id.clone(), output));
            }
        }

        warn!(
            max_iterations = self.config.max_iterations,
            "Iteration limit reached without a final answer"
        );
        Ok(RouterOutcome {
            reply: RouterReply::IterationExceeded,
            tool_invocations: executed,
            rounds: self.config.max_iterations,
            usage,
        })
    }

    /// Validate a tool call against the closed set and run it.
    /// Returns the text reported back to the model.
    async fn dispatch(&self, call: &ToolCall, executed: &mut Vec<ExecutedTool>) -> String {
        if !executed.is_empty() {
            debug!(tool = %call.name, "Rejecting extra tool call");
            return ONE_TOOL_PER_TURN.to_string();
        }

        let tool = match call.name.parse::<ToolName>() {
            Ok(tool) => tool,
            Err(_) => {
                warn!(tool = %call.name, "Model requested unknown tool");
                return unknown_tool_message(&call.name);
            }
        };

        let invocation = ToolInvocation {
            tool,
            raw_arguments: extract_tool_input(&call.arguments),
        };
        let result = self.tools.invoke(&invocation).await;
        let output = format_tool_result(&result);
        executed.push(ExecutedTool { invocation, result });
        output
    }
}

fn unknown_tool_message(name: &str) -> String {
    let names: Vec<&str> = ToolName::ALL.iter().map(|t| t.as_str()).collect();
    format!("{name} is not a valid tool, try one of [{}].", names.join(", "))
}

/// Pull the `input` string out of a tool call's JSON arguments.
///
/// A non-string `input` is passed on as its JSON text. Arguments that are not
/// a JSON object with an `input` key are used verbatim.
pub fn extract_tool_input(arguments: &str) -> String {
    match serde_json::from_str::<Value>(arguments) {
        Ok(Value::Object(map)) => match map.get("input") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => arguments.to_string(),
        },
        _ => arguments.to_string(),
    }
}
