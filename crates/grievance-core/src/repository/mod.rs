//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (grievance-infra) implements. The core crate never depends on any
//! specific transport.

pub mod complaint;
