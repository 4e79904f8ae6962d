//! The intent tool set: register, status lookup and list-by-mobile.
//!
//! Every operation returns a [`ToolResult`]; no fault escapes. Each tool
//! formats its own success text, so callers show the payload unchanged.

use serde_json::json;
use tracing::{Instrument, debug, info_span, warn};

use grievance_types::complaint::{ComplaintStatus, ComplaintSummary, RegisterComplaintRequest};
use grievance_types::error::{BackendError, ToolError};
use grievance_types::llm::ToolDefinition;
use grievance_types::tool::{ToolInvocation, ToolName, ToolResult};

use crate::repository::complaint::ComplaintRepository;

use super::parser::parse_with_format;

/// Complaint tools bound to a repository.
pub struct ComplaintTools<R> {
    repo: R,
}

impl<R: ComplaintRepository> ComplaintTools<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Tool definitions offered to the model. Each tool takes one string `input`.
    pub fn definitions() -> Vec<ToolDefinition> {
        ToolName::ALL
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.as_str().to_string(),
                description: tool.description().to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "input": { "type": "string" }
                    },
                    "required": ["input"]
                }),
            })
            .collect()
    }

    /// Run the tool named by `invocation`.
    pub async fn invoke(&self, invocation: &ToolInvocation) -> ToolResult {
        let span = info_span!("tool.invoke", tool = %invocation.tool);
        async {
            let result = match invocation.tool {
                ToolName::RegisterComplaint => self.register(&invocation.raw_arguments).await,
                ToolName::CheckComplaintStatus => {
                    self.check_status(&invocation.raw_arguments).await
                }
                ToolName::GetComplaintsByMobile => {
                    self.list_by_mobile(&invocation.raw_arguments).await
                }
            };
            debug!(success = result.is_success(), "Tool finished");
            result
        }
        .instrument(span)
        .await
    }

    /// Register a new complaint from loosely structured input.
    pub async fn register(&self, raw_arguments: &str) -> ToolResult {
        into_result(self.try_register(raw_arguments).await)
    }

    /// Look up a complaint by its identifier.
    pub async fn check_status(&self, complaint_id: &str) -> ToolResult {
        into_result(self.try_check_status(complaint_id.trim()).await)
    }

    /// List all complaints registered under a mobile number.
    pub async fn list_by_mobile(&self, mobile: &str) -> ToolResult {
        into_result(self.try_list_by_mobile(mobile.trim()).await)
    }

    async fn try_register(&self, raw_arguments: &str) -> Result<String, ToolError> {
        let (input, format) = parse_with_format(raw_arguments)?;
        debug!(?format, "Parsed complaint input");

        let request = RegisterComplaintRequest::from(input);
        match self.repo.register(&request).await {
            Ok(response) => Ok(response.message),
            Err(BackendError::Status { body, .. }) => Err(ToolError::RegistrationRejected(body)),
            Err(err) if err.is_unavailable() => Err(ToolError::BackendUnavailable(err.to_string())),
            Err(err) => Err(ToolError::RegistrationRejected(err.to_string())),
        }
    }

    async fn try_check_status(&self, complaint_id: &str) -> Result<String, ToolError> {
        if complaint_id.is_empty() {
            return Err(ToolError::NotFound(String::new()));
        }

        match self.repo.status(complaint_id).await {
            Ok(status) => Ok(format_status(&status)),
            Err(err) if err.is_unavailable() => Err(ToolError::BackendUnavailable(err.to_string())),
            Err(_) => Err(ToolError::NotFound(complaint_id.to_string())),
        }
    }

    async fn try_list_by_mobile(&self, mobile: &str) -> Result<String, ToolError> {
        if mobile.is_empty() {
            return Err(ToolError::ListFailed);
        }

        match self.repo.list_by_mobile(mobile).await {
            Ok(complaints) if complaints.is_empty() => {
                Ok(format!("No complaints found for mobile number: {mobile}"))
            }
            Ok(complaints) => Ok(format_complaint_list(mobile, &complaints)),
            Err(err) if err.is_unavailable() => Err(ToolError::BackendUnavailable(err.to_string())),
            Err(_) => Err(ToolError::ListFailed),
        }
    }
}

fn into_result(outcome: Result<String, ToolError>) -> ToolResult {
    match outcome {
        Ok(text) => ToolResult::Success(text),
        Err(err) => {
            warn!(error = ?err, "Tool failed");
            ToolResult::Failure(err.to_string())
        }
    }
}

/// Four-line status summary.
pub fn format_status(status: &ComplaintStatus) -> String {
    format!(
        "Complaint Status:\n- ID: {}\n- Status: {}\n- Created: {}\n- Updated: {}",
        status.complaint_id, status.status, status.created_at, status.updated_at
    )
}

/// Header line followed by one indented block per complaint.
pub fn format_complaint_list(mobile: &str, complaints: &[ComplaintSummary]) -> String {
    let mut out = format!("Complaints for mobile {mobile}:\n\n");
    for complaint in complaints {
        out.push_str(&format!("• ID: {}\n", complaint.complaint_id));
        out.push_str(&format!("  Status: {}\n", complaint.status));
        out.push_str(&format!("  Details: {}\n", complaint.details));
        out.push_str(&format!("  Created: {}\n\n", complaint.created_at));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryComplaints;

    fn tools() -> (ComplaintTools<InMemoryComplaints>, InMemoryComplaints) {
        let repo = InMemoryComplaints::new();
        (ComplaintTools::new(repo.clone()), repo)
    }

    #[test]
    fn test_definitions_cover_closed_set() {
        let defs = ComplaintTools::<InMemoryComplaints>::definitions();
        let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["register_complaint", "check_complaint_status", "get_complaints_by_mobile"]
        );
        assert_eq!(defs[0].parameters["required"][0], "input");
    }

    #[tokio::test]
    async fn test_register_delimited_returns_backend_message() {
        let (tools, repo) = tools();
        let result = tools.register("John Doe, 9876543210, laptop screen cracked").await;

        assert_eq!(
            result,
            ToolResult::Success("Complaint registered successfully with ID: CMP-00000001".to_string())
        );
        let stored = repo.registered();
        assert_eq!(stored[0].name, "John Doe");
        assert_eq!(stored[0].mobile, "9876543210");
        assert_eq!(stored[0].complaint_details, "laptop screen cracked");
    }

    #[tokio::test]
    async fn test_register_incomplete_never_calls_backend() {
        let (tools, repo) = tools();
        for raw in ["John Doe", "{\"name\": \"John\"}", "Name: John\nMobile: 1", ""] {
            let result = tools.register(raw).await;
            assert!(!result.is_success(), "expected failure for {raw:?}");
            assert!(result.text().contains("name, mobile number, and complaint details"));
        }
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn test_register_backend_rejection() {
        let (tools, repo) = tools();
        repo.fail_with(BackendError::Status {
            code: 500,
            body: "{\"detail\":\"db down\"}".to_string(),
        });
        let result = tools.register("A, 1, broken").await;
        assert_eq!(
            result,
            ToolResult::Failure("Failed to register complaint: {\"detail\":\"db down\"}".to_string())
        );
    }

    #[tokio::test]
    async fn test_register_transport_fault() {
        let (tools, repo) = tools();
        repo.fail_with(BackendError::Transport("connection refused".to_string()));
        let result = tools.register("A, 1, broken").await;
        assert_eq!(result, ToolResult::Failure("Error: connection refused".to_string()));
    }

    #[tokio::test]
    async fn test_check_status_found() {
        let (tools, _repo) = tools();
        tools.register("A, 1, broken").await;

        let result = tools.check_status("  CMP-00000001 \n").await;
        assert_eq!(
            result,
            ToolResult::Success(
                "Complaint Status:\n- ID: CMP-00000001\n- Status: In Progress\n- Created: 2025-01-01T10:00:00\n- Updated: 2025-01-01T10:00:00"
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_check_status_is_idempotent() {
        let (tools, _repo) = tools();
        tools.register("A, 1, broken").await;
        let first = tools.check_status("CMP-00000001").await;
        let second = tools.check_status("CMP-00000001").await;
        assert!(first.is_success());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_check_status_unknown_mentions_id() {
        let (tools, _repo) = tools();
        let result = tools.check_status("CMP-ABC12345").await;
        assert!(!result.is_success());
        assert!(result.text().contains("CMP-ABC12345"));
    }

    #[tokio::test]
    async fn test_check_status_non_200_is_not_found() {
        let (tools, repo) = tools();
        repo.fail_with(BackendError::Status {
            code: 500,
            body: "oops".to_string(),
        });
        let result = tools.check_status("CMP-ABC12345").await;
        assert_eq!(
            result,
            ToolResult::Failure("No complaint found with ID: CMP-ABC12345".to_string())
        );
    }

    #[tokio::test]
    async fn test_check_status_timeout() {
        let (tools, repo) = tools();
        repo.fail_with(BackendError::Timeout);
        let result = tools.check_status("CMP-ABC12345").await;
        assert_eq!(
            result,
            ToolResult::Failure("Error: backend request timed out".to_string())
        );
    }

    #[tokio::test]
    async fn test_list_empty_is_success() {
        let (tools, _repo) = tools();
        let result = tools.list_by_mobile("9999999999").await;
        assert_eq!(
            result,
            ToolResult::Success("No complaints found for mobile number: 9999999999".to_string())
        );
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let (tools, _repo) = tools();
        tools.register("A, 555, first issue").await;
        tools.register("B, 777, unrelated").await;
        tools.register("A, 555, second issue").await;

        let result = tools.list_by_mobile(" 555 ").await;
        let text = result.text();
        assert!(result.is_success());
        assert!(text.starts_with("Complaints for mobile 555:\n\n"));
        let newest = text.find("CMP-00000003").unwrap();
        let oldest = text.find("CMP-00000001").unwrap();
        assert!(newest < oldest);
        assert!(text.contains("  Details: second issue\n"));
        assert!(!text.contains("unrelated"));
    }

    #[tokio::test]
    async fn test_list_non_200_is_generic_failure() {
        let (tools, repo) = tools();
        repo.fail_with(BackendError::Status {
            code: 422,
            body: "bad".to_string(),
        });
        let result = tools.list_by_mobile("555").await;
        assert_eq!(result, ToolResult::Failure("Error fetching complaints".to_string()));
    }

    #[tokio::test]
    async fn test_invoke_dispatches_by_name() {
        let (tools, _repo) = tools();
        let invocation = ToolInvocation {
            tool: ToolName::GetComplaintsByMobile,
            raw_arguments: "123".to_string(),
        };
        let result = tools.invoke(&invocation).await;
        assert!(result.text().contains("No complaints found for mobile number: 123"));
    }

    #[test]
    fn test_format_complaint_list_layout() {
        let text = format_complaint_list(
            "42",
            &[ComplaintSummary {
                complaint_id: "CMP-AAAA1111".to_string(),
                status: "Resolved".to_string(),
                details: "noise".to_string(),
                created_at: "2025-02-01T09:00:00".to_string(),
            }],
        );
        assert_eq!(
            text,
            "Complaints for mobile 42:\n\n• ID: CMP-AAAA1111\n  Status: Resolved\n  Details: noise\n  Created: 2025-02-01T09:00:00\n\n"
        );
    }
}
