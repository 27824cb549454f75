use serde::{Deserialize, Serialize};

/// A latitude/longitude pair on the mock map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.lat >= 0.0 { 'N' } else { 'S' };
        let ew = if self.lon >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}\u{00b0} {}, {:.4}\u{00b0} {}",
            self.lat.abs(),
            ns,
            self.lon.abs(),
            ew
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Safest,
    Fastest,
    Balanced,
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteKind::Safest => write!(f, "Safest"),
            RouteKind::Fastest => write!(f, "Fastest"),
            RouteKind::Balanced => write!(f, "Balanced"),
        }
    }
}

/// One precomputed walking route between the demo endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteOption {
    pub id: String,
    pub name: String,
    pub kind: RouteKind,
    pub path: Vec<GeoPoint>,
    pub duration_mins: u32,
    pub distance_miles: f64,
    pub safety_score: u8,
}

impl RouteOption {
    pub fn formatted_duration(&self) -> String {
        format!("{} mins", self.duration_mins)
    }

    pub fn formatted_distance(&self) -> String {
        format!("{:.1} miles", self.distance_miles)
    }
}
