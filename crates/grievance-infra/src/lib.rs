//! Infrastructure layer for the grievance assistant.
//!
//! Contains implementations of the ports defined in `grievance-core`: the
//! OpenAI-compatible LLM provider and the HTTP complaint repository, plus the
//! TOML config loader.

pub mod config;
pub mod llm;
pub mod repository;
