//! Durable key-value state storage.
//!
//! This module provides the `StateStore`, the local stand-in for a browser's
//! persistent key-value storage. Each key maps to one JSON file inside the
//! application state directory.
//!
//! Two keys are in use:
//! - `session`: the serialized session snapshot (owned by `auth::session`)
//! - `language`: the selected language code (owned by `language`)

pub mod store;

pub use store::StateStore;
