use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A diagram node with its raw payload carried through.
///
/// Only the id is interpreted here. Position, kind, and step configuration
/// stay opaque until a renderer or runner cares about them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub id: String,
  #[serde(flatten)]
  pub data: Map<String, Value>,
}

/// A directed edge between two nodes, by id.
///
/// `source`/`target` is the canonical spelling; `from`/`to` is accepted on
/// input for older diagrams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDef {
  #[serde(alias = "from")]
  pub source: String,
  #[serde(alias = "to")]
  pub target: String,
}
