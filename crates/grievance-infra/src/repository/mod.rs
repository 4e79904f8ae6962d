//! Complaint repository adapters.

pub mod http_complaint;

pub use http_complaint::HttpComplaintRepository;
