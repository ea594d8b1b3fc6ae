use serde::{Deserialize, Serialize};

/// An authenticated principal, as resolved by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
  pub subject_id: String,
  #[serde(default)]
  pub is_admin: bool,
}

/// Resolved state of a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
  /// The token resolves to a known subject.
  Authenticated(Subject),
  /// The token resolves to nothing (absent, expired, or unknown).
  Anonymous,
  /// The identity provider has not finished resolving the token.
  /// Callers must not treat this as a denial.
  Pending,
}
