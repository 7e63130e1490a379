//! # u-tsp
//!
//! Traveling salesman solvers over geographic or planar points, built on a
//! shared distance model and tour representation.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour)
//! - [`distance`] — Great-circle and Euclidean cost matrices
//! - [`evaluation`] — Tour length and validity
//! - [`exact`] — Held-Karp dynamic programming (optimal, O(n²·2ⁿ))
//! - [`approx`] — Christofides-style construction (≤ 1.5× optimal on metric costs)
//! - [`local_search`] — 2-opt first-improvement local search
//! - [`io`] — Delimited point files
//! - [`simulation`] — Timed runs of several solvers and result reports
//!
//! ## Example
//!
//! ```
//! use u_tsp::models::Point;
//! use u_tsp::distance::{DistanceMatrix, Metric};
//! use u_tsp::{approx, exact, local_search};
//!
//! let points = vec![
//!     Point::new(1, 0.0, 0.0),
//!     Point::new(2, 0.0, 1.0),
//!     Point::new(3, 1.0, 1.0),
//!     Point::new(4, 1.0, 0.0),
//! ];
//! let dm = DistanceMatrix::from_points(&points, Metric::Euclidean)?;
//!
//! let optimal = exact::solve_exact(&dm)?;
//! let bounded = approx::solve_approx(&dm)?;
//! let local = local_search::solve_heuristic(&dm)?;
//! assert!(optimal.length() <= bounded.length() + 1e-10);
//! assert!(optimal.length() <= local.length() + 1e-10);
//! # Ok::<(), u_tsp::TspError>(())
//! ```

pub mod approx;
pub mod distance;
mod error;
pub mod evaluation;
pub mod exact;
pub mod io;
pub mod local_search;
pub mod models;
pub mod simulation;

pub use error::{Result, TspError};
