use thiserror::Error;

use templar_ingest::IngestError;
use templar_session::DenyReason;
use templar_workflow::WorkflowError;

/// Errors surfaced by hub operations.
#[derive(Debug, Error)]
pub enum HubError {
  /// The caller's session does not permit the operation.
  #[error("access denied: {0}")]
  AccessDenied(DenyReason),

  /// The session is still resolving. Callers should wait, not redirect.
  #[error("session resolution pending")]
  SessionPending,

  #[error("identity lookup failed: {0}")]
  Identity(#[from] templar_session::Error),

  #[error("malformed workflow input: {0}")]
  Malformed(#[from] IngestError),

  #[error("invalid workflow: {0}")]
  InvalidWorkflow(#[from] WorkflowError),

  #[error("storage error: {0}")]
  Store(#[from] templar_store::Error),
}
