//! Shared domain types for the grievance assistant.
//!
//! This crate contains the types used across the workspace: conversation
//! turns, complaint wire shapes, the closed tool set, LLM request/response
//! shapes, configuration, and error enums.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod complaint;
pub mod config;
pub mod error;
pub mod llm;
pub mod tool;
