use thiserror::Error;

/// Errors produced while normalizing workflow input.
#[derive(Debug, Error)]
pub enum IngestError {
  /// The input, or its double-encoded inner payload, is not valid JSON.
  #[error("invalid JSON: {0}")]
  Syntax(#[from] serde_json::Error),

  /// The input is valid JSON but matches no known workflow shape.
  #[error("unrecognized workflow shape")]
  UnrecognizedShape,
}
