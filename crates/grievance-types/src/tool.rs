//! The closed set of tools the agent may invoke, and their results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three supported intents, as exposed to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    RegisterComplaint,
    CheckComplaintStatus,
    GetComplaintsByMobile,
}

impl ToolName {
    /// Every tool, in the order they are offered to the model.
    pub const ALL: [ToolName; 3] = [
        ToolName::RegisterComplaint,
        ToolName::CheckComplaintStatus,
        ToolName::GetComplaintsByMobile,
    ];

    /// Wire name used in tool definitions and tool calls.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::RegisterComplaint => "register_complaint",
            ToolName::CheckComplaintStatus => "check_complaint_status",
            ToolName::GetComplaintsByMobile => "get_complaints_by_mobile",
        }
    }

    /// Description shown to the model.
    pub fn description(&self) -> &'static str {
        match self {
            ToolName::RegisterComplaint => {
                "Register a new complaint. Input format: 'name, mobile, complaint details' or JSON"
            }
            ToolName::CheckComplaintStatus => "Check complaint status. Input: complaint ID only",
            ToolName::GetComplaintsByMobile => {
                "Get all complaints for a mobile number. Input: mobile number only"
            }
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "register_complaint" => Ok(ToolName::RegisterComplaint),
            "check_complaint_status" => Ok(ToolName::CheckComplaintStatus),
            "get_complaints_by_mobile" => Ok(ToolName::GetComplaintsByMobile),
            other => Err(format!("unknown tool: '{other}'")),
        }
    }
}

/// A validated request to run one tool with the model's argument text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub tool: ToolName,
    pub raw_arguments: String,
}

/// Outcome of a tool invocation. Both variants carry user-readable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum ToolResult {
    Success(String),
    Failure(String),
}

impl ToolResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolResult::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            ToolResult::Success(text) | ToolResult::Failure(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name_roundtrip() {
        for tool in ToolName::ALL {
            let parsed: ToolName = tool.as_str().parse().unwrap();
            assert_eq!(tool, parsed);
        }
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let err = "delete_complaint".parse::<ToolName>().unwrap_err();
        assert!(err.contains("delete_complaint"));
    }

    #[test]
    fn test_tool_name_serde_matches_wire_name() {
        let json = serde_json::to_string(&ToolName::GetComplaintsByMobile).unwrap();
        assert_eq!(json, "\"get_complaints_by_mobile\"");
    }

    #[test]
    fn test_tool_result_serde() {
        let json = serde_json::to_value(ToolResult::Failure("nope".to_string())).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["text"], "nope");
    }
}
