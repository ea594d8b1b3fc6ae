//! Templar Workflow
//!
//! This crate provides the validated workflow representation. The ingestor
//! hands over raw node and edge objects without looking inside them; this
//! is where they acquire meaning:
//!
//! - every node must carry a string `id`, unique within the diagram
//! - every edge must name two known nodes
//! - the rest of each node's payload is carried through untouched
//!
//! A validated [`Workflow`] can derive a [`Graph`] for traversal (entry
//! points, join points, adjacency in both directions).

mod error;
mod graph;
mod node;
mod workflow;

pub use error::WorkflowError;
pub use graph::Graph;
pub use node::{EdgeDef, Node};
pub use workflow::Workflow;
