use thiserror::Error;

/// Errors from identity resolution.
#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read identity table: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid identity table: {0}")]
  Parse(#[from] serde_json::Error),
}
