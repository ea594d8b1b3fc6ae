use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
  #[error("node is missing a string id")]
  MissingNodeId,

  #[error("duplicate node id: {0}")]
  DuplicateNode(String),

  #[error("edge is missing source/target endpoints")]
  MalformedEdge,

  #[error("edge references unknown node: from={from}, to={to}")]
  UnknownEdgeEndpoint { from: String, to: String },
}
