//! Timed solver runs over one point set.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::config::{Algorithm, SimulationConfig};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{Point, Tour};

/// Outcome of one algorithm in a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverReport {
    /// Which solver produced the tour.
    pub algorithm: Algorithm,
    /// The tour, indexing the input point list.
    pub tour: Tour,
    /// Wall-clock solve time.
    pub elapsed: Duration,
}

/// Builds the distance matrix once and runs each configured algorithm on it.
///
/// Reports are returned in the order of `config.algorithms`. The first
/// solver error aborts the run.
///
/// # Examples
///
/// ```
/// use u_tsp::models::random_points;
/// use u_tsp::distance::Metric;
/// use u_tsp::simulation::{run_simulation, SimulationConfig};
///
/// let points = random_points(8, 1, 100.0);
/// let config = SimulationConfig::default().with_metric(Metric::Euclidean);
/// let reports = run_simulation(&points, &config).unwrap();
/// assert_eq!(reports.len(), 3);
/// // Held-Karp runs first and is optimal.
/// assert!(reports.iter().all(|r| reports[0].tour.length() <= r.tour.length() + 1e-9));
/// ```
pub fn run_simulation(points: &[Point], config: &SimulationConfig) -> Result<Vec<SolverReport>> {
    config.validate()?;
    let distances = DistanceMatrix::from_points(points, config.metric)?;

    let mut reports = Vec::with_capacity(config.algorithms.len());
    for &algorithm in &config.algorithms {
        let start = Instant::now();
        let tour = algorithm.solve(&distances, config)?;
        let elapsed = start.elapsed();
        log::info!(
            "simulation: {} n={} length={} runtime={}",
            algorithm.name(),
            points.len(),
            tour.length(),
            format_duration_hms(elapsed)
        );
        reports.push(SolverReport {
            algorithm,
            tour,
            elapsed,
        });
    }
    Ok(reports)
}

/// Formats a duration as `HH:MM:SS.mmm`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::simulation::format_duration_hms;
///
/// assert_eq!(format_duration_hms(Duration::from_millis(3_723_045)), "01:02:03.045");
/// ```
pub fn format_duration_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    let (hours, rest) = (total / 3600, total % 3600);
    let (minutes, seconds) = (rest / 60, rest % 60);
    format!(
        "{hours:02}:{minutes:02}:{seconds:02}.{:03}",
        duration.subsec_millis()
    )
}
