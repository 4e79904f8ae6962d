//! Business logic and port definitions for the grievance assistant.
//!
//! This crate defines the "ports" (the LLM provider and complaint repository
//! traits) that the infrastructure layer implements, plus the tool set, the
//! agent router and the conversation session. It depends only on
//! `grievance-types` -- never on `grievance-infra` or any HTTP crate.

pub mod agent;
pub mod chat;
pub mod llm;
pub mod repository;
pub mod tool;

#[cfg(test)]
pub(crate) mod test_support;
