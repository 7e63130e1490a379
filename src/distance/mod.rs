//! Distance model.
//!
//! Turns an ordered list of points into a symmetric cost matrix under a
//! configurable [`Metric`].

mod matrix;
mod metric;

pub use matrix::{DistanceMatrix, SYMMETRY_TOLERANCE};
pub use metric::{euclidean, haversine_km, Metric, EARTH_RADIUS_KM};
