//! Authentication module: session lifecycle and view gating.
//!
//! This module provides:
//! - `SessionStore`: owner of the single authenticated `Identity`, with
//!   async sign-in/sign-up against the mock directory and snapshot
//!   persistence through the state store
//! - `guard::decide`: the pure per-render decision gating protected views
//! - `Role`: closed role enum with the admin-panel capability check
//!
//! Sessions survive restarts through a snapshot under the `session` key;
//! sign-out deletes it.

pub mod error;
pub mod guard;
pub mod identity;
pub mod session;

pub use error::AuthError;
pub use guard::RouteDecision;
pub use identity::{Identity, Role};
pub use session::{SessionCaps, SessionState, SessionStore};
