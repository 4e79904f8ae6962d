//! In-process test doubles for the LLM and complaint repository ports.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use grievance_types::complaint::{
    ComplaintStatus, ComplaintSummary, RegisterComplaintRequest, RegisterComplaintResponse,
};
use grievance_types::error::BackendError;
use grievance_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, StopReason, ToolCall, Usage,
};

use crate::llm::provider::LlmProvider;
use crate::repository::complaint::ComplaintRepository;

/// LLM provider that replays canned responses and records every request.
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<CompletionResponse, LlmError>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<Result<CompletionResponse, LlmError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded requests, usable after the provider is boxed.
    pub fn requests(&self) -> Arc<Mutex<Vec<CompletionRequest>>> {
        Arc::clone(&self.requests)
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::InvalidRequest("script exhausted".to_string())))
    }
}

pub fn text_response(text: &str) -> Result<CompletionResponse, LlmError> {
    Ok(CompletionResponse {
        id: "resp".to_string(),
        content: text.to_string(),
        model: "scripted-model".to_string(),
        stop_reason: StopReason::EndTurn,
        tool_calls: Vec::new(),
        usage: Usage {
            input_tokens: 10,
            output_tokens: 5,
        },
    })
}

pub fn tool_response(calls: &[(&str, &str)]) -> Result<CompletionResponse, LlmError> {
    Ok(CompletionResponse {
        id: "resp".to_string(),
        content: String::new(),
        model: "scripted-model".to_string(),
        stop_reason: StopReason::ToolUse,
        tool_calls: calls
            .iter()
            .enumerate()
            .map(|(i, (name, args))| ToolCall {
                id: format!("call_{i}"),
                name: (*name).to_string(),
                arguments: (*args).to_string(),
            })
            .collect(),
        usage: Usage {
            input_tokens: 10,
            output_tokens: 5,
        },
    })
}

#[derive(Default)]
struct Store {
    complaints: Vec<(RegisterComplaintRequest, ComplaintStatus)>,
    calls: usize,
    fail_with: Option<BackendError>,
}

/// Complaint repository held in memory. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryComplaints {
    store: Arc<Mutex<Store>>,
}

impl InMemoryComplaints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `err`.
    pub fn fail_with(&self, err: BackendError) {
        self.store.lock().unwrap().fail_with = Some(err);
    }

    pub fn call_count(&self) -> usize {
        self.store.lock().unwrap().calls
    }

    pub fn registered(&self) -> Vec<RegisterComplaintRequest> {
        self.store
            .lock()
            .unwrap()
            .complaints
            .iter()
            .map(|(req, _)| req.clone())
            .collect()
    }

    fn begin(&self) -> Result<std::sync::MutexGuard<'_, Store>, BackendError> {
        let mut store = self.store.lock().unwrap();
        store.calls += 1;
        if let Some(err) = store.fail_with.clone() {
            return Err(err);
        }
        Ok(store)
    }
}

impl ComplaintRepository for InMemoryComplaints {
    async fn register(
        &self,
        request: &RegisterComplaintRequest,
    ) -> Result<RegisterComplaintResponse, BackendError> {
        let mut store = self.begin()?;
        let complaint_id = format!("CMP-{:08}", store.complaints.len() + 1);
        let now = format!("2025-01-0{}T10:00:00", store.complaints.len() + 1);
        store.complaints.push((
            request.clone(),
            ComplaintStatus {
                complaint_id: complaint_id.clone(),
                status: "In Progress".to_string(),
                created_at: now.clone(),
                updated_at: now,
            },
        ));
        Ok(RegisterComplaintResponse {
            message: format!("Complaint registered successfully with ID: {complaint_id}"),
            complaint_id,
        })
    }

    async fn status(&self, complaint_id: &str) -> Result<ComplaintStatus, BackendError> {
        let store = self.begin()?;
        store
            .complaints
            .iter()
            .find(|(_, status)| status.complaint_id == complaint_id)
            .map(|(_, status)| status.clone())
            .ok_or(BackendError::NotFound)
    }

    async fn list_by_mobile(&self, mobile: &str) -> Result<Vec<ComplaintSummary>, BackendError> {
        let store = self.begin()?;
        Ok(store
            .complaints
            .iter()
            .rev()
            .filter(|(req, _)| req.mobile == mobile)
            .map(|(req, status)| ComplaintSummary {
                complaint_id: status.complaint_id.clone(),
                status: status.status.clone(),
                details: req.complaint_details.clone(),
                created_at: status.created_at.clone(),
            })
            .collect())
    }
}
