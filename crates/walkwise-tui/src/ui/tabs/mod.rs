//! Tab-specific content rendering.
//!
//! One module per tab, each exposing `render(frame, app, area)` for the
//! content region between the tab bar and the status bar.

pub mod admin;
pub mod assistant;
pub mod home;
pub mod map;
pub mod profile;
pub mod report;
pub mod settings;
pub mod status;
