use std::fmt;

use crate::session::SessionState;

/// Privilege required for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  /// Any authenticated subject.
  Member,
  /// Subjects carrying the admin flag.
  Admin,
}

/// Why an access check denied the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
  /// No resolvable subject behind the token.
  Unauthenticated,
  /// The subject is known but lacks the required privilege.
  Forbidden,
}

impl fmt::Display for DenyReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DenyReason::Unauthenticated => write!(f, "unauthenticated"),
      DenyReason::Forbidden => write!(f, "forbidden"),
    }
  }
}

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
  Allowed { subject_id: String },
  Denied(DenyReason),
  /// The session is still resolving; show a waiting indicator, don't
  /// redirect.
  Pending,
}

/// Decide whether a session may perform an operation requiring `role`.
///
/// Pure decision function: no side effects, no I/O. The caller is
/// responsible for acting on the outcome.
pub fn check_access(state: &SessionState, role: Role) -> Access {
  match state {
    SessionState::Pending => Access::Pending,
    SessionState::Anonymous => Access::Denied(DenyReason::Unauthenticated),
    SessionState::Authenticated(subject) => {
      if role == Role::Admin && !subject.is_admin {
        Access::Denied(DenyReason::Forbidden)
      } else {
        Access::Allowed {
          subject_id: subject.subject_id.clone(),
        }
      }
    }
  }
}
