//! Point-to-point distance functions.

use serde::{Deserialize, Serialize};

use crate::models::Point;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine terms at or below this magnitude are treated as coincident points.
const HAVERSINE_ZERO: f64 = 1e-10;

/// How point coordinates are turned into distances.
///
/// Both variants are genuine metrics, so the triangle inequality holds for
/// any matrix built from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Great-circle distance in kilometres; coordinates are `(latitude, longitude)` in degrees.
    #[default]
    GreatCircle,
    /// Straight-line distance in the coordinate plane.
    Euclidean,
}

impl Metric {
    /// Distance between two points under this metric.
    pub fn distance(&self, a: &Point, b: &Point) -> f64 {
        match self {
            Metric::GreatCircle => haversine_km(a.x(), a.y(), b.x(), b.y()),
            Metric::Euclidean => euclidean(a.x(), a.y(), b.x(), b.y()),
        }
    }

    /// Unit suffix for reported lengths, if any.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Metric::GreatCircle => Some("km"),
            Metric::Euclidean => None,
        }
    }
}

/// Great-circle distance in kilometres between two `(lat, lon)` pairs in degrees.
///
/// The haversine term is clamped to `[0, 1]` before the inverse
/// trigonometric step, and terms within `1e-10` of zero yield exactly zero.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::haversine_km;
///
/// assert_eq!(haversine_km(48.85, 2.35, 48.85, 2.35), 0.0);
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let s_lat = (dlat / 2.0).sin();
    let s_lon = (dlon / 2.0).sin();
    let a = s_lat * s_lat + lat1.to_radians().cos() * lat2.to_radians().cos() * s_lon * s_lon;
    if a.abs() <= HAVERSINE_ZERO {
        return 0.0;
    }
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
pub fn euclidean(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}
