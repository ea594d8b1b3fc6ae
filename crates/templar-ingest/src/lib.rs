//! Templar Ingest
//!
//! This crate normalizes untrusted workflow JSON into one canonical
//! in-memory shape. Inputs arrive from files, pastes, and API bodies, and
//! show up in three forms:
//!
//! - a plain diagram: `{"nodes": [...], "edges": [...]}`
//! - an export envelope wrapping one or more workflows with versioning
//!   metadata (the "download workflow" format)
//! - either of the above double-encoded as a JSON string
//!
//! [`parse_workflow`] recognizes these shapes in order and produces a
//! [`ParsedWorkflow`] whose node and edge sequences are always present.
//! Node and edge contents are carried through unvalidated; interpreting
//! them is the graph builder's job.

mod envelope;
mod error;
mod parse;

pub use envelope::{Diagram, ExportData, ExportEnvelope, ExportedWorkflow, EXPORT_VERSION};
pub use error::IngestError;
pub use parse::{parse_workflow, ParsedWorkflow};

/// A raw JSON object, as found in node and edge sequences.
pub type RawObject = serde_json::Map<String, serde_json::Value>;
