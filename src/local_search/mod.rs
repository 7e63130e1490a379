//! Local search improvement of TSP tours.
//!
//! - [`solve_heuristic`] — 2-opt from the identity tour to a local optimum
//! - [`two_opt_improve`] — 2-opt applied to any starting order

mod config;
mod two_opt;

pub use config::TwoOptConfig;
pub use two_opt::{solve_heuristic, solve_heuristic_with, two_opt_improve};
