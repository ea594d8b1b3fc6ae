//! Templar Session
//!
//! This crate owns the access-control seam of the hub:
//!
//! - [`SessionState`] is what the identity provider resolves an opaque
//!   token into: an authenticated [`Subject`], anonymous, or still pending.
//! - [`check_access`] is a pure decision function over that state; callers
//!   map its outcome to a redirect, an error response, or a waiting
//!   indicator.
//! - [`IdentityProvider`] is the async lookup trait, with
//!   [`FixedIdentityProvider`] as the in-memory implementation backing the
//!   CLI and tests.
//!
//! Sessions are created and expired elsewhere; this crate only inspects
//! already-resolved state.

mod error;
mod gate;
mod provider;
mod session;

pub use error::Error;
pub use gate::{check_access, Access, DenyReason, Role};
pub use provider::{FixedIdentityProvider, IdentityProvider};
pub use session::{SessionState, Subject};
