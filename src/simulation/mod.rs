//! Running several solvers on one point set and reporting the results.
//!
//! - [`run_simulation`] — build the matrix once, time each selected algorithm
//! - [`run_scaling`] — repeat at growing sizes until every algorithm hits the cutoff
//! - [`write_report`] / [`write_scaling_report`] / [`reports_to_json`] — text and JSON output

mod config;
mod report;
mod runner;
mod scaling;

pub use config::{Algorithm, ScalingConfig, SimulationConfig};
pub use report::{reports_to_json, write_report, write_scaling_report};
pub use runner::{format_duration_hms, run_simulation, SolverReport};
pub use scaling::{run_scaling, ScalingRound};
