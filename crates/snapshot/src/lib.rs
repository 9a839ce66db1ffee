//! Snapshot orchestration for the shop collector.
//!
//! Drives one run end to end: precondition check, session requests, event
//! routing into the catalog state holders, and, once both prerequisites
//! have arrived, the concurrent download-and-write phase that produces
//! the archive.

mod error;
mod orchestrator;

pub use error::SnapshotError;
pub use orchestrator::Orchestrator;
