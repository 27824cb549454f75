//! Demo data served by the mock directory.
//!
//! Everything here mirrors the hosted demo: two demo accounts, the New York
//! map overlays, three precomputed routes, four seed reports, and the
//! notification tray contents. Timestamps are generated relative to now so
//! the relative-time labels stay plausible.

use chrono::{Duration, Utc};

use crate::auth::{Identity, Role};
use crate::models::{
    Camera, CameraStatus, CrimeZone, GeoPoint, IncidentCategory, IncidentReport, NoticeKind,
    Notification, ReportStatus, RiskLevel, RouteKind, RouteOption, Severity,
};

use super::client::CredentialRecord;

pub fn demo_accounts() -> Vec<CredentialRecord> {
    vec![
        CredentialRecord {
            email: "user@example.com".to_string(),
            password: "password".to_string(),
            identity: Identity {
                id: "1".to_string(),
                name: "John Doe".to_string(),
                email: "user@example.com".to_string(),
                role: Role::User,
                avatar: Some("https://i.pravatar.cc/150?img=1".to_string()),
            },
        },
        CredentialRecord {
            email: "admin@example.com".to_string(),
            password: "password".to_string(),
            identity: Identity {
                id: "2".to_string(),
                name: "Admin User".to_string(),
                email: "admin@example.com".to_string(),
                role: Role::Admin,
                avatar: Some("https://i.pravatar.cc/150?img=2".to_string()),
            },
        },
    ]
}

pub fn cameras() -> Vec<Camera> {
    vec![
        Camera {
            id: "1".to_string(),
            name: "Times Square Camera 1".to_string(),
            position: GeoPoint::new(40.7128, -74.0060),
            status: CameraStatus::Active,
        },
        Camera {
            id: "2".to_string(),
            name: "Central Park South".to_string(),
            position: GeoPoint::new(40.7200, -74.0100),
            status: CameraStatus::Active,
        },
        Camera {
            id: "3".to_string(),
            name: "Grand Central".to_string(),
            position: GeoPoint::new(40.7180, -73.9950),
            status: CameraStatus::Maintenance,
        },
        Camera {
            id: "4".to_string(),
            name: "Financial District".to_string(),
            position: GeoPoint::new(40.7080, -74.0120),
            status: CameraStatus::Inactive,
        },
        Camera {
            id: "5".to_string(),
            name: "Midtown East".to_string(),
            position: GeoPoint::new(40.7220, -74.0000),
            status: CameraStatus::Active,
        },
    ]
}

pub fn crime_zones() -> Vec<CrimeZone> {
    vec![
        CrimeZone {
            id: "1".to_string(),
            center: GeoPoint::new(40.7150, -74.0080),
            radius_meters: 200,
            level: RiskLevel::High,
            description: "High theft area".to_string(),
        },
        CrimeZone {
            id: "2".to_string(),
            center: GeoPoint::new(40.7100, -74.0020),
            radius_meters: 300,
            level: RiskLevel::Medium,
            description: "Medium risk zone".to_string(),
        },
        CrimeZone {
            id: "3".to_string(),
            center: GeoPoint::new(40.7230, -74.0050),
            radius_meters: 250,
            level: RiskLevel::Low,
            description: "Low risk area".to_string(),
        },
    ]
}

pub fn route_options() -> Vec<RouteOption> {
    vec![
        RouteOption {
            id: "1".to_string(),
            name: "Safest Route".to_string(),
            kind: RouteKind::Safest,
            path: vec![
                GeoPoint::new(40.7128, -74.0060),
                GeoPoint::new(40.7150, -74.0030),
                GeoPoint::new(40.7180, -74.0010),
                GeoPoint::new(40.7200, -74.0000),
            ],
            duration_mins: 15,
            distance_miles: 1.2,
            safety_score: 95,
        },
        RouteOption {
            id: "2".to_string(),
            name: "Fastest Route".to_string(),
            kind: RouteKind::Fastest,
            path: vec![
                GeoPoint::new(40.7128, -74.0060),
                GeoPoint::new(40.7140, -74.0050),
                GeoPoint::new(40.7160, -74.0030),
                GeoPoint::new(40.7200, -74.0000),
            ],
            duration_mins: 10,
            distance_miles: 1.0,
            safety_score: 70,
        },
        RouteOption {
            id: "3".to_string(),
            name: "Balanced Route".to_string(),
            kind: RouteKind::Balanced,
            path: vec![
                GeoPoint::new(40.7128, -74.0060),
                GeoPoint::new(40.7145, -74.0040),
                GeoPoint::new(40.7170, -74.0020),
                GeoPoint::new(40.7200, -74.0000),
            ],
            duration_mins: 12,
            distance_miles: 1.1,
            safety_score: 85,
        },
    ]
}

pub fn seed_reports() -> Vec<IncidentReport> {
    let now = Utc::now();
    vec![
        IncidentReport {
            id: "1".to_string(),
            category: IncidentCategory::Theft,
            location: "Main St & 5th Ave".to_string(),
            occurred_at: now - Duration::hours(1),
            description: "Phone snatching incident near subway entrance".to_string(),
            severity: Severity::High,
            status: ReportStatus::Verified,
            photos: Vec::new(),
        },
        IncidentReport {
            id: "2".to_string(),
            category: IncidentCategory::Suspicious,
            location: "Central Park South".to_string(),
            occurred_at: now - Duration::hours(2),
            description: "Suspicious person loitering near ATMs".to_string(),
            severity: Severity::Medium,
            status: ReportStatus::Reviewing,
            photos: Vec::new(),
        },
        IncidentReport {
            id: "3".to_string(),
            category: IncidentCategory::Infrastructure,
            location: "Broadway & 34th St".to_string(),
            occurred_at: now - Duration::days(1),
            description: "Broken streetlight creating dark area".to_string(),
            severity: Severity::Low,
            status: ReportStatus::Pending,
            photos: Vec::new(),
        },
        IncidentReport {
            id: "4".to_string(),
            category: IncidentCategory::Harassment,
            location: "Times Square".to_string(),
            occurred_at: now - Duration::days(2),
            description: "Verbal harassment incident".to_string(),
            severity: Severity::Medium,
            status: ReportStatus::Rejected,
            photos: Vec::new(),
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    let now = Utc::now();
    vec![
        Notification {
            id: "1".to_string(),
            kind: NoticeKind::Alert,
            title: "Safety Alert".to_string(),
            message: "Increased incidents reported near Central Park".to_string(),
            sent_at: now - Duration::minutes(30),
            read: false,
        },
        Notification {
            id: "2".to_string(),
            kind: NoticeKind::Info,
            title: "Route Update".to_string(),
            message: "Your usual route has a new safety score".to_string(),
            sent_at: now - Duration::hours(1),
            read: false,
        },
        Notification {
            id: "3".to_string(),
            kind: NoticeKind::Warning,
            title: "Area Advisory".to_string(),
            message: "Construction work affecting safe paths on 5th Ave".to_string(),
            sent_at: now - Duration::hours(2),
            read: false,
        },
    ]
}
