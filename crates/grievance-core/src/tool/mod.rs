//! The intent tool set and its input parser.

pub mod complaint_tools;
pub mod parser;

pub use complaint_tools::ComplaintTools;
