use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::RawObject;

/// Envelope version written by the download feature.
pub const EXPORT_VERSION: u32 = 1;

/// A canonical diagram: node and edge sequences, always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
  #[serde(default)]
  pub nodes: Vec<RawObject>,
  #[serde(default)]
  pub edges: Vec<RawObject>,
}

impl From<Diagram> for Value {
  fn from(diagram: Diagram) -> Self {
    let mut map = Map::new();
    map.insert(
      "nodes".to_string(),
      Value::Array(diagram.nodes.into_iter().map(Value::Object).collect()),
    );
    map.insert(
      "edges".to_string(),
      Value::Array(diagram.edges.into_iter().map(Value::Object).collect()),
    );
    Value::Object(map)
  }
}

/// Versioned wrapper around one or more workflow definitions, as produced
/// by the download feature and accepted back by [`crate::parse_workflow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEnvelope {
  pub version: u32,
  pub data: ExportData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
  pub workflows: Vec<ExportedWorkflow>,
}

/// One workflow entry inside an export envelope.
///
/// The diagram key is spelled `diagramJson` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedWorkflow {
  #[serde(default)]
  pub diagram_json: Diagram,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl ExportEnvelope {
  /// Wrap a single diagram for download.
  pub fn single(name: impl Into<String>, description: Option<String>, diagram: Diagram) -> Self {
    Self {
      version: EXPORT_VERSION,
      data: ExportData {
        workflows: vec![ExportedWorkflow {
          diagram_json: diagram,
          name: Some(name.into()),
          description,
        }],
      },
    }
  }
}
