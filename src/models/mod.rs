//! Domain model types.
//!
//! Points carry an identifier and two coordinates; tours are closed visiting
//! orders over matrix indices together with their length.

mod point;
mod tour;

pub use point::{random_points, Point};
pub use tour::Tour;
