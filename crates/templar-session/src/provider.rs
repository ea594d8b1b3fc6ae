use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::error::Error;
use crate::session::{SessionState, Subject};

/// Resolves opaque session tokens to session state.
///
/// Implementations talk to whatever issues sessions (a cookie-backed
/// session table, an SSO provider). An unknown token is
/// [`SessionState::Anonymous`], not an error; errors mean the provider
/// itself could not answer.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
  async fn lookup(&self, token: &str) -> Result<SessionState, Error>;
}

/// In-memory token table, loadable from a JSON file.
///
/// Backs the CLI and tests. The file maps tokens to subjects:
///
/// ```json
/// {
///   "tok-alice": { "subject_id": "alice", "is_admin": true },
///   "tok-bob": { "subject_id": "bob" }
/// }
/// ```
pub struct FixedIdentityProvider {
  subjects: HashMap<String, Subject>,
}

impl FixedIdentityProvider {
  pub fn new(subjects: HashMap<String, Subject>) -> Self {
    Self { subjects }
  }

  /// Load the token table from a JSON file.
  pub fn from_file(path: &Path) -> Result<Self, Error> {
    let content = std::fs::read_to_string(path)?;
    let subjects = serde_json::from_str(&content)?;
    Ok(Self { subjects })
  }
}

#[async_trait]
impl IdentityProvider for FixedIdentityProvider {
  async fn lookup(&self, token: &str) -> Result<SessionState, Error> {
    Ok(match self.subjects.get(token) {
      Some(subject) => SessionState::Authenticated(subject.clone()),
      None => SessionState::Anonymous,
    })
  }
}
