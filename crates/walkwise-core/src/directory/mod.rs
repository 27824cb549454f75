//! Mock directory service module.
//!
//! This module provides the `DirectoryClient` for credential checks and the
//! demo content (cameras, crime zones, routes, seed reports, notifications).
//! Authentication calls carry a simulated network delay; everything else is
//! served synchronously from fixtures.

pub mod client;
pub mod fixtures;

pub use client::{CredentialRecord, DirectoryClient};
