//! HTTP implementation of [`ComplaintRepository`] against the complaint service.
//!
//! Endpoints:
//! - `POST /api/register_complaint`
//! - `GET  /api/complaint_status/{complaint_id}`
//! - `GET  /api/complaints_by_mobile/{mobile}`
//!
//! Path parameters are appended as encoded segments, so user text cannot
//! change the request path.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use tracing::debug;

use grievance_core::repository::complaint::ComplaintRepository;
use grievance_types::complaint::{
    ComplaintStatus, ComplaintSummary, RegisterComplaintRequest, RegisterComplaintResponse,
};
use grievance_types::config::BackendConfig;
use grievance_types::error::BackendError;

pub struct HttpComplaintRepository {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpComplaintRepository {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| BackendError::Transport(format!("invalid backend URL '{}': {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::Transport(format!(
                "invalid backend URL '{}'",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Reachability probe: `GET /docs`. Any HTTP response counts as reachable.
    pub async fn probe(&self) -> Result<StatusCode, BackendError> {
        let url = self.endpoint(&["docs"]);
        let response = self.client.get(url).send().await.map_err(map_send_error)?;
        Ok(response.status())
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn error_body(response: reqwest::Response) -> BackendError {
        let code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        BackendError::Status { code, body }
    }
}

fn map_send_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Transport(err.to_string())
    }
}

fn map_decode_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Decode(err.to_string())
    }
}

impl ComplaintRepository for HttpComplaintRepository {
    async fn register(
        &self,
        request: &RegisterComplaintRequest,
    ) -> Result<RegisterComplaintResponse, BackendError> {
        let url = self.endpoint(&["api", "register_complaint"]);
        debug!(%url, "Registering complaint");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }
        response.json().await.map_err(map_decode_error)
    }

    async fn status(&self, complaint_id: &str) -> Result<ComplaintStatus, BackendError> {
        let url = self.endpoint(&["api", "complaint_status", complaint_id]);
        debug!(%url, "Fetching complaint status");

        let response = self.client.get(url).send().await.map_err(map_send_error)?;

        match response.status() {
            StatusCode::OK => response.json().await.map_err(map_decode_error),
            StatusCode::NOT_FOUND => Err(BackendError::NotFound),
            _ => Err(Self::error_body(response).await),
        }
    }

    async fn list_by_mobile(&self, mobile: &str) -> Result<Vec<ComplaintSummary>, BackendError> {
        let url = self.endpoint(&["api", "complaints_by_mobile", mobile]);
        debug!(%url, "Listing complaints by mobile");

        let response = self.client.get(url).send().await.map_err(map_send_error)?;

        if response.status() != StatusCode::OK {
            return Err(Self::error_body(response).await);
        }
        response.json().await.map_err(map_decode_error)
    }
}
