//! Templar Hub
//!
//! The service layer of the template hub. Every operation resolves the
//! caller's session token, gates it with the access check, and only then
//! touches ingestion or storage:
//!
//! - import: parse untrusted workflow JSON, validate the graph, persist
//! - browse/get/export: public reads, export wrapped in a download envelope
//! - update/delete: restricted to the template's author or an admin
//! - category counts: served through a TTL cache, invalidated on writes
//!
//! The hub owns no HTTP surface; a web frontend or the CLI maps these
//! operations and their typed errors onto its own responses.

mod error;
mod hub;

pub use error::HubError;
pub use hub::Hub;
