use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use templar_ingest::ParsedWorkflow;

use crate::error::WorkflowError;
use crate::graph::Graph;
use crate::node::{EdgeDef, Node};

/// A validated workflow diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
  pub name: Option<String>,
  pub description: Option<String>,
  pub nodes: HashMap<String, Node>,
  pub edges: Vec<(String, String)>,
}

impl Workflow {
  /// Validate a parsed workflow into a workflow ready to persist.
  pub fn from_parsed(parsed: ParsedWorkflow) -> Result<Self, WorkflowError> {
    let ParsedWorkflow {
      raw_nodes,
      raw_edges,
      name,
      description,
    } = parsed;

    let mut nodes: HashMap<String, Node> = HashMap::with_capacity(raw_nodes.len());
    for raw in raw_nodes {
      let node: Node =
        serde_json::from_value(Value::Object(raw)).map_err(|_| WorkflowError::MissingNodeId)?;
      if nodes.contains_key(&node.id) {
        return Err(WorkflowError::DuplicateNode(node.id));
      }
      nodes.insert(node.id.clone(), node);
    }

    let mut edges = Vec::with_capacity(raw_edges.len());
    for raw in raw_edges {
      let edge: EdgeDef =
        serde_json::from_value(Value::Object(raw)).map_err(|_| WorkflowError::MalformedEdge)?;
      if !nodes.contains_key(&edge.source) || !nodes.contains_key(&edge.target) {
        return Err(WorkflowError::UnknownEdgeEndpoint {
          from: edge.source,
          to: edge.target,
        });
      }
      edges.push((edge.source, edge.target));
    }

    Ok(Self {
      name,
      description,
      nodes,
      edges,
    })
  }

  /// Build the graph structure for traversal.
  pub fn graph(&self) -> Graph {
    Graph::new(self.nodes.keys(), &self.edges)
  }

  /// Get a node by ID.
  pub fn get_node(&self, node_id: &str) -> Option<&Node> {
    self.nodes.get(node_id)
  }
}
