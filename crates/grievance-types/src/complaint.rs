//! Complaint wire shapes exchanged with the persistence service.
//!
//! Timestamps are kept as the strings the service sends; they are only ever
//! shown back to the user, never compared.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/register_complaint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterComplaintRequest {
    pub name: String,
    pub mobile: String,
    pub complaint_details: String,
}

/// Response of `POST /api/register_complaint`.
///
/// `message` already embeds the generated complaint identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterComplaintResponse {
    pub complaint_id: String,
    pub message: String,
}

/// Response of `GET /api/complaint_status/{complaint_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintStatus {
    pub complaint_id: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One element of `GET /api/complaints_by_mobile/{mobile}` (newest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintSummary {
    pub complaint_id: String,
    pub status: String,
    pub details: String,
    pub created_at: String,
}

/// Registration fields extracted from free-form tool input.
///
/// All three fields are non-empty after trimming once constructed by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedComplaintInput {
    pub name: String,
    pub mobile: String,
    pub details: String,
}

impl From<ParsedComplaintInput> for RegisterComplaintRequest {
    fn from(input: ParsedComplaintInput) -> Self {
        Self {
            name: input.name,
            mobile: input.mobile,
            complaint_details: input.details,
        }
    }
}
