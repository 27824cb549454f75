use serde::{Deserialize, Serialize};

use super::route::GeoPoint;

/// Default map center (New York).
pub const MAP_CENTER: GeoPoint = GeoPoint::new(40.7128, -74.0060);

/// Default map zoom level.
pub const MAP_ZOOM: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Active,
    Maintenance,
    Inactive,
}

impl std::fmt::Display for CameraStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraStatus::Active => write!(f, "Active"),
            CameraStatus::Maintenance => write!(f, "Maintenance"),
            CameraStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// A CCTV camera marker on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub id: String,
    pub name: String,
    pub position: GeoPoint,
    pub status: CameraStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// A circular crime-zone overlay on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrimeZone {
    pub id: String,
    pub center: GeoPoint,
    pub radius_meters: u32,
    pub level: RiskLevel,
    pub description: String,
}
