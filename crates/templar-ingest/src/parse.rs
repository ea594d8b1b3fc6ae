use serde::Deserialize;
use serde_json::Value;

use crate::envelope::{Diagram, ExportEnvelope, ExportedWorkflow};
use crate::error::IngestError;
use crate::RawObject;

/// Canonical result of workflow ingestion.
///
/// On success `raw_nodes` and `raw_edges` are concrete sequences, possibly
/// empty, never absent. `name` and `description` are set only when the
/// input was an export envelope that carried them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedWorkflow {
  pub raw_nodes: Vec<RawObject>,
  pub raw_edges: Vec<RawObject>,
  pub name: Option<String>,
  pub description: Option<String>,
}

impl ParsedWorkflow {
  /// The canonical `{nodes, edges}` diagram for this workflow.
  pub fn diagram(&self) -> Diagram {
    Diagram {
      nodes: self.raw_nodes.clone(),
      edges: self.raw_edges.clone(),
    }
  }
}

/// A top-level diagram shape. Presence of the keys matters: an object with
/// neither `nodes` nor `edges` is not a diagram.
#[derive(Deserialize)]
struct DirectShape {
  nodes: Option<Vec<RawObject>>,
  edges: Option<Vec<RawObject>>,
}

/// Normalize workflow JSON into a [`ParsedWorkflow`].
///
/// Recognized shapes, first match wins:
/// 1. an export envelope `{version, data: {workflows: [{diagramJson, ...}]}}`,
///    taking the first workflow entry
/// 2. a direct diagram with a top-level `nodes` or `edges` key
///
/// Export payloads sometimes arrive double-encoded (a JSON string holding
/// JSON); exactly one extra layer is unwrapped before the shape checks.
pub fn parse_workflow(text: &str) -> Result<ParsedWorkflow, IngestError> {
  let mut value: Value = serde_json::from_str(text)?;

  if let Value::String(inner) = &value {
    value = serde_json::from_str(inner)?;
  }

  if let Ok(envelope) = serde_json::from_value::<ExportEnvelope>(value.clone()) {
    // An envelope with no workflow entries usually means a truncated
    // export; rejecting beats silently importing an empty diagram.
    let entry = envelope
      .data
      .workflows
      .into_iter()
      .next()
      .ok_or(IngestError::UnrecognizedShape)?;

    let ExportedWorkflow {
      diagram_json,
      name,
      description,
    } = entry;

    return Ok(ParsedWorkflow {
      raw_nodes: diagram_json.nodes,
      raw_edges: diagram_json.edges,
      name,
      description,
    });
  }

  if let Ok(direct) = serde_json::from_value::<DirectShape>(value)
    && (direct.nodes.is_some() || direct.edges.is_some())
  {
    return Ok(ParsedWorkflow {
      raw_nodes: direct.nodes.unwrap_or_default(),
      raw_edges: direct.edges.unwrap_or_default(),
      name: None,
      description: None,
    });
  }

  Err(IngestError::UnrecognizedShape)
}
