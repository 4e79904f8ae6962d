//! Observability setup for the grievance assistant: structured logging via
//! `tracing` and optional OpenTelemetry span export.

pub mod tracing_setup;
