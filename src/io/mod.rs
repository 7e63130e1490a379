//! Point input adapters.

mod points;

pub use points::{detect_delimiter, parse_points, read_points};
