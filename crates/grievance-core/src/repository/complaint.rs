//! Complaint repository trait definition.

use grievance_types::complaint::{
    ComplaintStatus, ComplaintSummary, RegisterComplaintRequest, RegisterComplaintResponse,
};
use grievance_types::error::BackendError;

/// Port to the complaint persistence service.
///
/// Implementations live in grievance-infra (e.g., `HttpComplaintRepository`).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait ComplaintRepository: Send + Sync {
    /// Store a new complaint. The service generates the identifier.
    fn register(
        &self,
        request: &RegisterComplaintRequest,
    ) -> impl std::future::Future<Output = Result<RegisterComplaintResponse, BackendError>> + Send;

    /// Look up a complaint by identifier. `BackendError::NotFound` if absent.
    fn status(
        &self,
        complaint_id: &str,
    ) -> impl std::future::Future<Output = Result<ComplaintStatus, BackendError>> + Send;

    /// All complaints filed under a mobile number, newest first.
    fn list_by_mobile(
        &self,
        mobile: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ComplaintSummary>, BackendError>> + Send;
}
