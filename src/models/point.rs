//! Located points.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A point to be visited by a tour.
///
/// Coordinates are interpreted by the [`Metric`](crate::distance::Metric)
/// used to build the distance matrix: `(latitude, longitude)` in degrees for
/// great-circle distance, or planar `(x, y)` for Euclidean distance.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
///
/// let p = Point::new(7, 3.0, 4.0);
/// assert_eq!(p.id(), 7);
/// assert_eq!(p.x(), 3.0);
/// assert_eq!(p.y(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Point identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// First coordinate (x, or latitude).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Second coordinate (y, or longitude).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Generates `n` points uniformly distributed in `[0, extent)²`.
///
/// Identifiers are `0..n`. The same seed always yields the same points.
///
/// # Examples
///
/// ```
/// use u_tsp::models::random_points;
///
/// let a = random_points(10, 42, 100.0);
/// let b = random_points(10, 42, 100.0);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 10);
/// ```
pub fn random_points(n: usize, seed: u64, extent: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|id| {
            let x = rng.random_range(0.0..extent);
            let y = rng.random_range(0.0..extent);
            Point::new(id, x, y)
        })
        .collect()
}
