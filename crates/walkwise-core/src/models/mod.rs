//! Data models for walkwise entities.
//!
//! This module contains the data structures used across the app:
//!
//! - `IncidentReport`, `ReportDraft`: community incident reporting
//! - `RouteOption`, `GeoPoint`: precomputed walking routes
//! - `Camera`, `CrimeZone`: map overlay entities
//! - `Notification`: the notification tray

pub mod incident;
pub mod map;
pub mod notification;
pub mod route;

pub use incident::{
    IncidentCategory, IncidentReport, ReportDraft, ReportStatus, Severity, MAX_REPORT_PHOTOS,
};
pub use map::{Camera, CameraStatus, CrimeZone, RiskLevel, MAP_CENTER, MAP_ZOOM};
pub use notification::{relative_time, NoticeKind, Notification};
pub use route::{GeoPoint, RouteKind, RouteOption};
