//! WalkWise core library.
//!
//! Everything the terminal client needs that is not presentation: the
//! session store and route guard, the mock directory backend with its demo
//! fixtures, the incident report ledger, the safety assistant responder,
//! language preference, and the on-disk state store that backs persistence.

pub mod assistant;
pub mod auth;
pub mod config;
pub mod directory;
pub mod language;
pub mod models;
pub mod reports;
pub mod storage;

pub use auth::{AuthError, Identity, Role, RouteDecision, SessionCaps, SessionState, SessionStore};
pub use config::Config;
pub use directory::DirectoryClient;
pub use storage::StateStore;
